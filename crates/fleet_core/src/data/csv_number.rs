use serde::{Deserialize, Deserializer};

/// Numeric cell where a blank value reads as NaN. Text that is not a number is still an error.
pub(crate) fn empty_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
