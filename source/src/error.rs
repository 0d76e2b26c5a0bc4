use thiserror::Error;

/// ошибки разбора UCD и построения таблицы символов
///
/// все варианты фатальны для текущего запуска: исходные данные UCD считаются согласованными,
/// поэтому структурные ошибки указывают на ошибку в конвейере или неподдерживаемую версию Unicode
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UcdError
{
    #[error("строка {line}: ожидалось 15 полей, получено {count}")]
    FieldCount
    {
        line: usize,
        count: usize,
    },

    #[error("строка {line}: некорректный шестнадцатеричный код '{value}'")]
    InvalidHex
    {
        line: usize,
        value: String,
    },

    #[error("строка {line}: некорректное число '{value}'")]
    InvalidNumber
    {
        line: usize,
        value: String,
    },

    #[error("строка {line}: некорректный флаг '{value}'")]
    InvalidFlag
    {
        line: usize,
        value: String,
    },

    #[error("строка {line}: некорректный формат '{value}'")]
    MalformedLine
    {
        line: usize,
        value: String,
    },

    #[error("диапазон без пары: {name} (U+{code:04X})")]
    OrphanedRangeEnd
    {
        name: String,
        code: u32,
    },

    #[error("неожиданный элемент декомпозиции {component} для U+{code:04X}")]
    MissingJamo
    {
        code: u32,
        component: String,
    },

    #[error("неизвестный bidi класс: {0}")]
    UnknownBidiClass(String),

    #[error("неизвестный тип декомпозиции: {0}")]
    UnknownDecompositionType(String),
}

impl UcdError
{
    /// указать номер строки исходного файла для ошибок разбора строки
    pub fn at_line(self, number: usize) -> Self
    {
        match self {
            Self::FieldCount { count, .. } => Self::FieldCount { line: number, count },
            Self::InvalidHex { value, .. } => Self::InvalidHex { line: number, value },
            Self::InvalidNumber { value, .. } => Self::InvalidNumber { line: number, value },
            Self::InvalidFlag { value, .. } => Self::InvalidFlag { line: number, value },
            Self::MalformedLine { value, .. } => Self::MalformedLine { line: number, value },
            other => other,
        }
    }
}

pub type UcdResult<T> = Result<T, UcdError>;
