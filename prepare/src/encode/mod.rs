use serde::{Deserialize, Serialize};
use unicode_character_source::{BidiClass, Character, DecompositionType, Numeric};

use crate::error::{PrepareError, PrepareResult};

mod category;

pub use category::CategoryCode;

/// символ в виде, пригодном для записи в хранилище
///
/// строковые свойства заменены кодами фиксированной ширины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedCharacter
{
    pub code: u32,
    pub name: String,
    pub category: CategoryCode,
    pub combining: u8,
    /// значение BidiClass
    pub bidirectional: u8,
    /// значение DecompositionType
    pub decomposition_type: u8,
    pub decomposition: Vec<u32>,
    pub decimal: u8,
    pub digit: u8,
    pub numeric: Numeric,
    pub mirrored: bool,
    pub uppercase: u32,
    pub lowercase: u32,
    pub titlecase: u32,
}

/// закодировать символ: категория - 4 байта, bidi класс и тип декомпозиции - u8
///
/// неизвестный тег - фатальная ошибка: словари должны покрывать все значения, которые дают
/// предыдущие этапы
pub fn encode_character(character: Character) -> PrepareResult<EncodedCharacter>
{
    let decomposition_type = match &character.decomposition_type {
        Some(value) => DecompositionType::try_from(value.as_str())?,
        None => return Err(PrepareError::MissingDecompositionType(character.code)),
    };

    let bidirectional = BidiClass::try_from(character.bidirectional.as_str())?;
    let category = CategoryCode::encode(&character.category)?;

    Ok(EncodedCharacter {
        code: character.code,
        name: character.name,
        category,
        combining: character.combining,
        bidirectional: bidirectional.into(),
        decomposition_type: decomposition_type.into(),
        decomposition: character.decomposition,
        decimal: character.decimal,
        digit: character.digit,
        numeric: character.numeric,
        mirrored: character.mirrored,
        uppercase: character.uppercase,
        lowercase: character.lowercase,
        titlecase: character.titlecase,
    })
}

/// закодировать всю таблицу
pub fn encode_all(characters: Vec<Character>) -> PrepareResult<Vec<EncodedCharacter>>
{
    characters.into_iter().map(encode_character).collect()
}
