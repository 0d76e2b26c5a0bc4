use serde::{Deserialize, Serialize};

use crate::error::{UcdError, UcdResult};

/// значение decimal / digit для символов, не являющихся цифрами
pub const NOT_A_DIGIT: u8 = 255;

/// числовое значение (Numeric Value)
/// берется из UCD: 8 колонка UnicodeData.txt
///
/// может быть дробью (например, U+00BD - 1/2) или отрицательным (U+0F33 - -1/2)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeric
{
    pub numerator: i64,
    pub denominator: u64,
}

impl Numeric
{
    /// символ не имеет числового значения
    pub const NONE: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    pub fn is_none(&self) -> bool
    {
        *self == Self::NONE
    }
}

impl Default for Numeric
{
    fn default() -> Self
    {
        Self::NONE
    }
}

impl TryFrom<&str> for Numeric
{
    type Error = UcdError;

    fn try_from(value: &str) -> UcdResult<Self>
    {
        if value.is_empty() {
            return Ok(Self::NONE);
        }

        let invalid = || UcdError::InvalidNumber {
            line: 0,
            value: value.to_owned(),
        };

        let (numerator, denominator) = match value.split_once('/') {
            Some((n, d)) => (n, d),
            None => (value, "1"),
        };

        let numerator = numerator.parse::<i64>().map_err(|_| invalid())?;
        let denominator = denominator.parse::<u64>().map_err(|_| invalid())?;

        if denominator == 0 {
            return Err(invalid());
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }
}
