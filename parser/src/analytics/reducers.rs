/// Reduces the flattened values of one group.
pub trait Reducer {
    type Output;

    fn reduce(&self, values: Vec<f64>) -> Self::Output;
}

/// Keeps the raw values, e.g. for distribution plots.
pub struct Identity;

pub struct Mean;

/// Population standard deviation.
pub struct StandardDeviation;

impl Reducer for Identity {
    type Output = Vec<f64>;

    fn reduce(&self, values: Vec<f64>) -> Vec<f64> {
        values
    }
}

impl Reducer for Mean {
    type Output = f64;

    fn reduce(&self, values: Vec<f64>) -> f64 {
        mean(&values)
    }
}

impl Reducer for StandardDeviation {
    type Output = f64;

    fn reduce(&self, values: Vec<f64>) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mean = mean(&values);
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
