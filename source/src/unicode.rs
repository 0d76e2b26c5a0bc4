use regex::Regex;

use crate::error::{UcdError, UcdResult};
use crate::properties::*;

/// количество полей в строке UnicodeData.txt
pub const FIELDS_COUNT: usize = 15;

lazy_static! {
    /// <тег> коды декомпозиции
    static ref DECOMPOSITION: Regex = Regex::new(r"^(?:<(\w+)> )?([0-9A-F ]+)$").unwrap();
}

/// разбор UnicodeData.txt из UCD
///
/// диапазоны (<..., First>, <..., Last>) остаются как есть, их разворачивает expansion::expand_ranges
pub fn parse_unicode_data(text: &str) -> UcdResult<Vec<Character>>
{
    let mut characters = vec![];

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }

        characters.push(parse_line(line).map_err(|e| e.at_line(i + 1))?);
    }

    log::debug!("UnicodeData.txt: {} записей", characters.len());

    Ok(characters)
}

/// разбор строки UnicodeData.txt
///
/// 00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;
///
/// колонки:
///  0. код
///  1. название
///  2. General_Category
///  3. Canonical_Combining_Class
///  4. Bidi_Class
///  5. <Decomposition_Type> Decomposition_Mapping
///  6. числовое значение, если decimal
///  7. числовое значение, если digit
///  8. числовое значение (может быть дробью)
///  9. Bidi_Mirrored
/// 10. Unicode_1_Name
/// 11. ISO_Comment
/// 12. Simple_Uppercase_Mapping
/// 13. Simple_Lowercase_Mapping
/// 14. Simple_Titlecase_Mapping
///
pub fn parse_line(line: &str) -> UcdResult<Character>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != FIELDS_COUNT {
        return Err(UcdError::FieldCount {
            line: 0,
            count: props.len(),
        });
    }

    // код и название
    let mut character = Character::new(parse_hex(props[0])?, props[1]);

    // категория, CCC и Bidi класс
    if !props[2].is_empty() {
        character.category = props[2].to_owned();
    }

    if !props[3].is_empty() {
        character.combining = parse_decimal(props[3])?;
    }

    if !props[4].is_empty() {
        character.bidirectional = props[4].to_owned();
    }

    // декомпозиция и тег декомпозиции
    if let Some(captures) = DECOMPOSITION.captures(props[5]) {
        character.decomposition = captures[2]
            .split_whitespace()
            .map(parse_hex)
            .collect::<UcdResult<Vec<u32>>>()?;

        character.decomposition_type = captures.get(1).map(|tag| tag.as_str().to_uppercase());
    }

    // различные numeric значения
    if !props[6].is_empty() {
        character.decimal = parse_decimal(props[6])?;
    }

    if !props[7].is_empty() {
        character.digit = parse_decimal(props[7])?;
    }

    character.numeric = Numeric::try_from(props[8])?;

    character.mirrored = match props[9] {
        "Y" => true,
        "N" | "" => false,
        value => {
            return Err(UcdError::InvalidFlag {
                line: 0,
                value: value.to_owned(),
            })
        }
    };

    // пропускаем колонки 10, 11:
    //
    // * Unicode_1_Name (Obsolete as of 6.2.0)
    // * ISO_Comment (Obsolete as of 5.2.0; Deprecated and Stabilized as of 6.0.0)

    // связанные символы в другом регистре (если есть), 0 - нет
    character.uppercase = parse_optional_hex(props[12])?;
    character.lowercase = parse_optional_hex(props[13])?;
    character.titlecase = parse_optional_hex(props[14])?;

    Ok(character)
}

/// кодпоинт в шестнадцатеричном виде
pub fn parse_hex(value: &str) -> UcdResult<u32>
{
    match u32::from_str_radix(value.trim(), 16) {
        Ok(code) if code <= 0x10FFFF => Ok(code),
        _ => Err(UcdError::InvalidHex {
            line: 0,
            value: value.to_owned(),
        }),
    }
}

/// кодпоинт или 0, если поле пустое
fn parse_optional_hex(value: &str) -> UcdResult<u32>
{
    match value.is_empty() {
        true => Ok(0),
        false => parse_hex(value),
    }
}

fn parse_decimal(value: &str) -> UcdResult<u8>
{
    value.parse().map_err(|_| UcdError::InvalidNumber {
        line: 0,
        value: value.to_owned(),
    })
}
