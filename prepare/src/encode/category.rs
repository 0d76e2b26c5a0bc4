use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrepareError, PrepareResult};

/// категория символа (general category) в виде 4 байт фиксированной ширины
///
/// "Lu" -> 0x4c750000: байты тега, дополненные нулями справа, big-endian.
/// в хранилище записывается как bytes4, поэтому стоимость хранения не зависит от длины тега
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryCode([u8; 4]);

impl CategoryCode
{
    /// закодировать тег категории
    pub fn encode(category: &str) -> PrepareResult<Self>
    {
        let bytes = category.as_bytes();

        if bytes.len() > 4 || !category.is_ascii() {
            return Err(PrepareError::InvalidCategory(category.to_owned()));
        }

        let mut code = [0u8; 4];
        code[.. bytes.len()].copy_from_slice(bytes);

        Ok(Self(code))
    }

    /// восстановить тег категории, нулевые байты отбрасываются
    pub fn decode(&self) -> String
    {
        self.0
            .iter()
            .take_while(|b| **b != 0)
            .map(|b| *b as char)
            .collect()
    }

    pub fn bytes(&self) -> [u8; 4]
    {
        self.0
    }

    /// значение как big-endian число
    pub fn value(&self) -> u32
    {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for CategoryCode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:08x}", self.value())
    }
}

impl FromStr for CategoryCode
{
    type Err = PrepareError;

    /// разбор представления "0x4c750000"
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let invalid = || PrepareError::InvalidCategory(s.to_owned());

        let hex = s.strip_prefix("0x").ok_or_else(invalid)?;

        if hex.len() != 8 {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        Ok(Self(value.to_be_bytes()))
    }
}

impl Serialize for CategoryCode
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryCode
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
