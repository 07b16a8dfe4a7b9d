/// Direction prediction and training for every predictor.
pub mod predictors;
