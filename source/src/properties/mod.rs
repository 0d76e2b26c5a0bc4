mod bidi_class;
mod decomposition_type;
mod numeric;

use serde::{Deserialize, Serialize};

pub use bidi_class::BidiClass;
pub use decomposition_type::DecompositionType;
pub use numeric::Numeric;
pub use numeric::NOT_A_DIGIT;

/// символ Unicode
/// источник - UCD, UnicodeData.txt
///
/// строковые свойства (категория, bidi класс, тип декомпозиции) хранятся в текстовом виде
/// до этапа кодирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character
{
    /// код символа
    pub code: u32,
    /// название (только ASCII)
    pub name: String,
    /// категория символа (general category)
    pub category: String,
    /// класс канонического комбинирования (canonical combining class)
    pub combining: u8,
    /// класс направления (bidi class)
    pub bidirectional: String,
    /// тип декомпозиции, заполняется окончательно на этапе восстановления производных свойств
    pub decomposition_type: Option<String>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
    /// десятичное значение, либо NOT_A_DIGIT
    pub decimal: u8,
    /// цифра, либо NOT_A_DIGIT
    pub digit: u8,
    /// числовое значение
    pub numeric: Numeric,
    /// "зеркальный" символ двунаправленого текста (bidi mirrored)
    pub mirrored: bool,
    /// соответствующая прописная буква, 0 - нет
    pub uppercase: u32,
    /// соответствующая строчная буква, 0 - нет
    pub lowercase: u32,
    /// соответствующая заглавная буква, 0 - нет
    pub titlecase: u32,
}

impl Character
{
    /// символ с заполненными значениями по умолчанию
    pub fn new(code: u32, name: impl Into<String>) -> Self
    {
        Self {
            code,
            name: name.into(),
            category: "Cn".to_owned(),
            combining: 0,
            bidirectional: "L".to_owned(),
            decomposition_type: None,
            decomposition: vec![],
            decimal: NOT_A_DIGIT,
            digit: NOT_A_DIGIT,
            numeric: Numeric::NONE,
            mirrored: false,
            uppercase: 0,
            lowercase: 0,
            titlecase: 0,
        }
    }
}
