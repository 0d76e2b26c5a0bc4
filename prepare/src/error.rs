use std::path::PathBuf;

use thiserror::Error;
use unicode_character_source::UcdError;

/// ошибки подготовки таблицы символов
#[derive(Error, Debug)]
pub enum PrepareError
{
    #[error(transparent)]
    Ucd(#[from] UcdError),

    #[error("не удалось получить {source_name}: {reason}")]
    Fetch
    {
        source_name: String,
        reason: String,
    },

    #[error("ошибка ввода-вывода ({path}): {error}")]
    Io
    {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("ошибка сериализации: {0}")]
    Json(#[from] serde_json::Error),

    #[error("категория '{0}' не укладывается в 4 байта")]
    InvalidCategory(String),

    #[error("U+{0:04X}: тип декомпозиции не заполнен")]
    MissingDecompositionType(u32),

    #[error("пакет {batch} отклонен хранилищем (записано пакетов: {committed}): {reason}")]
    Store
    {
        batch: usize,
        committed: usize,
        reason: String,
    },
}

impl PrepareError
{
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self
    {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}

pub type PrepareResult<T> = Result<T, PrepareError>;
