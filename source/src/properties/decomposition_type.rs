use crate::error::UcdError;

/// тип декомпозиции
/// берется из UCD: тег в 5 колонке UnicodeData.txt, окончательное значение - extracted/DerivedDecompositionType.txt
/// 18 вариантов, значения совпадают с перечислением хранилища
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum DecompositionType
{
    /// декомпозиции нет
    None = 0,
    /// каноническая декомпозиция
    Canonical = 1,
    /// неопределенный символ для обеспечения совместимости
    Compat = 2,
    /// окруженная форма
    Circle = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// вариант шрифта
    Font = 5,
    /// форма обыкновенной дроби
    Fraction = 6,
    /// начальная форма представления (арабский)
    Initial = 7,
    /// изолированная форма представления (арабский)
    Isolated = 8,
    /// средняя форма представления (арабский)
    Medial = 9,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow = 10,
    /// неразрывная версия пробела или дефиса
    NoBreak = 11,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// подстрочная форма
    Sub = 14,
    /// надстрочная форма
    Super = 15,
    /// вертикальная форма представления
    Vertical = 16,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide = 17,
}

impl TryFrom<&str> for DecompositionType
{
    type Error = UcdError;

    /// принимает как тег UnicodeData.txt (noBreak), так и значение DerivedDecompositionType.txt (Nobreak)
    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.to_uppercase().as_str() {
            "NONE" => Self::None,
            "CANONICAL" => Self::Canonical,
            "COMPAT" => Self::Compat,
            "CIRCLE" => Self::Circle,
            "FINAL" => Self::Final,
            "FONT" => Self::Font,
            "FRACTION" => Self::Fraction,
            "INITIAL" => Self::Initial,
            "ISOLATED" => Self::Isolated,
            "MEDIAL" => Self::Medial,
            "NARROW" => Self::Narrow,
            "NOBREAK" => Self::NoBreak,
            "SMALL" => Self::Small,
            "SQUARE" => Self::Square,
            "SUB" => Self::Sub,
            "SUPER" => Self::Super,
            "VERTICAL" => Self::Vertical,
            "WIDE" => Self::Wide,
            _ => return Err(UcdError::UnknownDecompositionType(value.to_owned())),
        })
    }
}

impl TryFrom<u8> for DecompositionType
{
    type Error = UcdError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match value <= 17 {
            true => Ok(unsafe { core::mem::transmute::<u8, DecompositionType>(value) }),
            false => Err(UcdError::UnknownDecompositionType(value.to_string())),
        }
    }
}

impl From<DecompositionType> for u8
{
    #[inline]
    fn from(value: DecompositionType) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for DecompositionType
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            DecompositionType::None => "NONE",
            DecompositionType::Canonical => "CANONICAL",
            DecompositionType::Compat => "COMPAT",
            DecompositionType::Circle => "CIRCLE",
            DecompositionType::Final => "FINAL",
            DecompositionType::Font => "FONT",
            DecompositionType::Fraction => "FRACTION",
            DecompositionType::Initial => "INITIAL",
            DecompositionType::Isolated => "ISOLATED",
            DecompositionType::Medial => "MEDIAL",
            DecompositionType::Narrow => "NARROW",
            DecompositionType::NoBreak => "NOBREAK",
            DecompositionType::Small => "SMALL",
            DecompositionType::Square => "SQUARE",
            DecompositionType::Sub => "SUB",
            DecompositionType::Super => "SUPER",
            DecompositionType::Vertical => "VERTICAL",
            DecompositionType::Wide => "WIDE",
        };

        write!(f, "{}", value)
    }
}
