use std::fs;
use std::path::PathBuf;

use crate::error::{PrepareError, PrepareResult};

/// исходные файлы UCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UcdSource
{
    UnicodeData,
    Jamo,
    DerivedBidiClass,
    DerivedDecompositionType,
}

impl UcdSource
{
    /// путь к файлу относительно каталога UCD
    pub fn file_name(&self) -> &'static str
    {
        match self {
            Self::UnicodeData => "UnicodeData.txt",
            Self::Jamo => "Jamo.txt",
            Self::DerivedBidiClass => "extracted/DerivedBidiClass.txt",
            Self::DerivedDecompositionType => "extracted/DerivedDecompositionType.txt",
        }
    }
}

/// получение текста исходного файла UCD
///
/// загрузка с unicode.org в этот крейт не входит, реализации могут читать локальную копию
/// или скачивать файл
pub trait SourceFetcher
{
    fn fetch(&self, source: UcdSource) -> PrepareResult<String>;
}

/// чтение файлов из локального каталога UCD (например, ./../data/ucd/15.1.0)
pub struct DirectoryFetcher
{
    dir: PathBuf,
}

impl DirectoryFetcher
{
    pub fn new(dir: impl Into<PathBuf>) -> Self
    {
        Self { dir: dir.into() }
    }
}

impl SourceFetcher for DirectoryFetcher
{
    fn fetch(&self, source: UcdSource) -> PrepareResult<String>
    {
        let path = self.dir.join(source.file_name());

        log::info!("читаем {}", path.display());

        fs::read_to_string(&path).map_err(|e| PrepareError::Fetch {
            source_name: source.file_name().to_owned(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn file_names()
    {
        assert_eq!(UcdSource::UnicodeData.file_name(), "UnicodeData.txt");
        assert_eq!(UcdSource::DerivedBidiClass.file_name(), "extracted/DerivedBidiClass.txt");
    }

    #[test]
    fn missing_directory()
    {
        let fetcher = DirectoryFetcher::new("./does/not/exist");

        assert!(matches!(
            fetcher.fetch(UcdSource::Jamo),
            Err(PrepareError::Fetch { source_name, .. }) if source_name == "Jamo.txt"
        ));
    }

    #[test]
    fn reads_test_data()
    {
        let fetcher = DirectoryFetcher::new("./../test_data/ucd");
        let text = fetcher.fetch(UcdSource::Jamo).unwrap();

        assert!(text.contains("HANGUL CHOSEONG KIYEOK"));
    }
}
