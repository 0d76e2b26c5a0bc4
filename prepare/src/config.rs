use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrepareError, PrepareResult};
use crate::output::BATCH_SIZE;

/// настройки подготовки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig
{
    /// каталог с файлами UCD: UnicodeData.txt, Jamo.txt, extracted/Derived*.txt
    #[serde(default = "defaults::ucd_dir")]
    pub ucd_dir: PathBuf,

    /// каталог JSON-снимков
    #[serde(default = "defaults::cache_dir")]
    pub cache_dir: PathBuf,

    /// файл, в который записываются пакеты для хранилища
    #[serde(default = "defaults::output")]
    pub output: PathBuf,

    /// количество символов в пакете
    #[serde(default = "defaults::batch_size")]
    pub batch_size: usize,
}

mod defaults
{
    use std::path::PathBuf;

    pub fn ucd_dir() -> PathBuf
    {
        PathBuf::from("./../data/ucd/15.1.0")
    }

    pub fn cache_dir() -> PathBuf
    {
        PathBuf::from("./../data/cache")
    }

    pub fn output() -> PathBuf
    {
        PathBuf::from("./../data/batches.jsonl")
    }

    pub fn batch_size() -> usize
    {
        super::BATCH_SIZE
    }
}

impl Default for PrepareConfig
{
    fn default() -> Self
    {
        Self {
            ucd_dir: defaults::ucd_dir(),
            cache_dir: defaults::cache_dir(),
            output: defaults::output(),
            batch_size: defaults::batch_size(),
        }
    }
}

impl PrepareConfig
{
    /// прочитать настройки из JSON-файла, отсутствующие поля - по умолчанию
    pub fn load(path: impl AsRef<Path>) -> PrepareResult<Self>
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PrepareError::io(path, e))?;

        Ok(serde_json::from_str(&text)?)
    }

    /// настройки из файла, указанного первым аргументом, либо по умолчанию
    pub fn from_args(mut args: impl Iterator<Item = String>) -> PrepareResult<Self>
    {
        match args.nth(1) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
