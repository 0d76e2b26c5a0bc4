use crate::error::UcdError;

/// класс направления текста (bidi class)
/// берется из UCD: четвертая колонка UnicodeData.txt, для отсутствующих кодпоинтов - extracted/DerivedBidiClass.txt
/// 23 варианта, значения совпадают с перечислением хранилища
///
/// группы классов:
///     strong (L, R, AL) - сильный тип направления - символы, которые имеют явно заданное направление
///     weak (EN, ES, ET, AN, CS, NSM, BN) - слабый тип направления - символы, направление которых зависит от контекста
///     neutral (B, S, WS, ON) - нейтральные типы - символы, не имеющие определенного направления и не влияющие на направление письма
///     explicit (LRE, LRO, RLE, RLO, LRI, RLI, PDF, PDI, FSI) - явные типы форматирования - символы, используемые для явного управления направлением текста
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum BidiClass
{
    /// L - любой сильный LTR-символ
    LeftToRight = 0,
    /// R - любой сильный (не арабский) RTL-символ
    RightToLeft = 1,
    /// AL - любой сильный (арабский) RTL-символ
    ArabicLetter = 2,

    /// AN - любая арабско-индийская цифра
    ArabicNumber = 3,
    /// EN - любая цифра ASCII или восточно-арабская индийская цифра
    EuropeanNumber = 4,
    /// ES - знаки плюса и минуса
    EuropeanSeparator = 5,
    /// ET - терминатор в контексте числового формата, включает символы валюты
    EuropeanTerminator = 6,
    /// CS - запятые, двоеточия и слеши
    CommonSeparator = 7,
    /// NSM - не занимающий места символ, не оказывающий влияния на направление текста
    NonspacingMark = 8,
    /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
    BoundaryNeutral = 9,

    /// B - различные символы новой строки, которые разделяют абзацы
    ParagraphSeparator = 10,
    /// S - различные управляющие коды, связанные с сегментами текста
    SegmentSeparator = 11,
    /// WS - пробельные символы, такие как пробелы и табуляции
    Whitespace = 12,
    /// ON - большинство других символов и знаков пунктуации
    OtherNeutral = 13,

    /// LRE - U+202A - символ вставки слева направо (LR embedding control)
    LeftToRightEmbedding = 14,
    /// LRO - U+202D - символ переопределения слева направо (LR override control)
    LeftToRightOverride = 15,
    /// RLE - U+202B - символ вставки справа налево (RL embedding control)
    RightToLeftEmbedding = 16,
    /// RLO - U+202E - символ переопределения справа налево (RL override control)
    RightToLeftOverride = 17,
    /// LRI - U+2066 - символ изоляции слева направо (LR isolate control)
    LeftToRightIsolate = 18,
    /// RLI - U+2067 - символ изоляции справа налево (RL isolate control)
    RightToLeftIsolate = 19,
    /// PDF - U+202C - символ окончания направляющего форматирования (pop directional format)
    PopDirectionalFormat = 20,
    /// PDI - U+2069 - символ окончания изоляции направления (pop directional isolate)
    PopDirectionalIsolate = 21,
    /// FSI - U+2068 - символ первой сильной изоляции (first strong isolate control)
    FirstStrongIsolate = 22,
}

impl BidiClass
{
    /// является-ли сильным типом направления
    #[inline]
    pub fn is_strong(&self) -> bool
    {
        u8::from(*self) < 3
    }

    /// сокращенное название, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::LeftToRight => "L",
            Self::RightToLeft => "R",
            Self::ArabicLetter => "AL",
            Self::ArabicNumber => "AN",
            Self::EuropeanNumber => "EN",
            Self::EuropeanSeparator => "ES",
            Self::EuropeanTerminator => "ET",
            Self::CommonSeparator => "CS",
            Self::NonspacingMark => "NSM",
            Self::BoundaryNeutral => "BN",
            Self::ParagraphSeparator => "B",
            Self::SegmentSeparator => "S",
            Self::Whitespace => "WS",
            Self::OtherNeutral => "ON",
            Self::LeftToRightEmbedding => "LRE",
            Self::LeftToRightOverride => "LRO",
            Self::RightToLeftEmbedding => "RLE",
            Self::RightToLeftOverride => "RLO",
            Self::LeftToRightIsolate => "LRI",
            Self::RightToLeftIsolate => "RLI",
            Self::PopDirectionalFormat => "PDF",
            Self::PopDirectionalIsolate => "PDI",
            Self::FirstStrongIsolate => "FSI",
        }
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = UcdError;

    /// регистр не учитывается
    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr.to_uppercase().as_str() {
            "L" => Self::LeftToRight,
            "R" => Self::RightToLeft,
            "AL" => Self::ArabicLetter,
            "AN" => Self::ArabicNumber,
            "EN" => Self::EuropeanNumber,
            "ES" => Self::EuropeanSeparator,
            "ET" => Self::EuropeanTerminator,
            "CS" => Self::CommonSeparator,
            "NSM" => Self::NonspacingMark,
            "BN" => Self::BoundaryNeutral,
            "B" => Self::ParagraphSeparator,
            "S" => Self::SegmentSeparator,
            "WS" => Self::Whitespace,
            "ON" => Self::OtherNeutral,
            "LRE" => Self::LeftToRightEmbedding,
            "LRO" => Self::LeftToRightOverride,
            "RLE" => Self::RightToLeftEmbedding,
            "RLO" => Self::RightToLeftOverride,
            "LRI" => Self::LeftToRightIsolate,
            "RLI" => Self::RightToLeftIsolate,
            "PDF" => Self::PopDirectionalFormat,
            "PDI" => Self::PopDirectionalIsolate,
            "FSI" => Self::FirstStrongIsolate,
            _ => return Err(UcdError::UnknownBidiClass(abbr.to_owned())),
        })
    }
}

impl TryFrom<u8> for BidiClass
{
    type Error = UcdError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        if value > 22 {
            return Err(UcdError::UnknownBidiClass(value.to_string()));
        }

        Ok(unsafe { core::mem::transmute::<u8, BidiClass>(value) })
    }
}

impl From<BidiClass> for u8
{
    #[inline]
    fn from(value: BidiClass) -> Self
    {
        value as u8
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn dictionary_bounds()
    {
        assert_eq!(u8::from(BidiClass::try_from("L").unwrap()), 0);
        assert_eq!(u8::from(BidiClass::try_from("FSI").unwrap()), 22);
        assert_eq!(u8::from(BidiClass::try_from("BN").unwrap()), 9);
    }

    #[test]
    fn case_insensitive()
    {
        assert_eq!(BidiClass::try_from("nsm"), Ok(BidiClass::NonspacingMark));
    }

    #[test]
    fn abbr_round_trip()
    {
        for value in 0 ..= 22u8 {
            let class = BidiClass::try_from(value).unwrap();
            assert_eq!(BidiClass::try_from(class.abbr()), Ok(class));
        }

        assert!(BidiClass::try_from(23u8).is_err());
    }

    #[test]
    fn unknown_tag()
    {
        assert_eq!(
            BidiClass::try_from("XYZ"),
            Err(UcdError::UnknownBidiClass("XYZ".to_owned()))
        );
    }

    #[test]
    fn strong_classes()
    {
        assert!(BidiClass::ArabicLetter.is_strong());
        assert!(!BidiClass::ArabicNumber.is_strong());
    }
}
