use crate::error::{UcdError, UcdResult};
use crate::jamo::JamoShortNames;

use super::hangul::is_hangul_syllable;

/// правило построения названия символа из диапазона
/// Table 4-8 Name Derivation Rule Prefix Strings
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NameRule
{
    /// слоги хангыль, U+AC00..U+D7A3: префикс + короткие названия чамо
    NR1,
    /// все прочие диапазоны: префикс + "-" + код
    NR2,
}

impl NameRule
{
    pub fn for_code(code: u32) -> Self
    {
        match is_hangul_syllable(code) {
            true => Self::NR1,
            false => Self::NR2,
        }
    }
}

/// название символа, развернутого из диапазона
pub fn derive_name(label: &str, code: u32, decomposition: &[u32], jamo: &JamoShortNames) -> UcdResult<String>
{
    match NameRule::for_code(code) {
        NameRule::NR1 => hangul_name(label, code, decomposition, jamo),
        NameRule::NR2 => Ok(format!("{}-{:x}", label, code)),
    }
}

/// название слога хангыль: короткое название первого чамо в верхнем регистре,
/// остальных - в нижнем, без разделителей
fn hangul_name(label: &str, code: u32, decomposition: &[u32], jamo: &JamoShortNames) -> UcdResult<String>
{
    let mut short_name = String::new();

    for (i, component) in decomposition.iter().enumerate() {
        let key = format!("{:04X}", component);

        let name = match jamo.get(&key) {
            Some(name) => name,
            None => {
                return Err(UcdError::MissingJamo {
                    code,
                    component: key,
                })
            }
        };

        match i == 0 {
            true => short_name.push_str(&name.to_uppercase()),
            false => short_name.push_str(&name.to_lowercase()),
        }
    }

    Ok(format!("{} {}", label, short_name))
}
