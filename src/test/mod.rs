mod calc;
mod plot;
