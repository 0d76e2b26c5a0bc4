use std::collections::BTreeMap;

use crate::error::{UcdError, UcdResult};

/// короткие названия чамо: шестнадцатеричный код (как в Jamo.txt) -> короткое название
pub type JamoShortNames = BTreeMap<String, String>;

/// разбор Jamo.txt из UCD
///
/// 1100; G     # HANGUL CHOSEONG KIYEOK
///
/// короткое название может быть пустым (U+110B, IEUNG)
pub fn parse_jamo(text: &str) -> UcdResult<JamoShortNames>
{
    let mut names = JamoShortNames::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (code, name) = match line.split_once(';') {
            Some(parts) => parts,
            None => {
                return Err(UcdError::MalformedLine {
                    line: i + 1,
                    value: line.to_owned(),
                })
            }
        };

        // убираем комментарий
        let name = match name.split_once('#') {
            Some((name, _)) => name,
            None => name,
        };

        names.insert(code.trim().to_owned(), name.trim().to_owned());
    }

    log::debug!("Jamo.txt: {} коротких названий", names.len());

    Ok(names)
}
