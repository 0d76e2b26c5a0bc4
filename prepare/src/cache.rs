use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PrepareError, PrepareResult};

/// снимок таблицы типов декомпозиции
pub const DECOMPOSITION_TYPES_KEY: &str = "decomposition_types";
/// снимок таблицы bidi классов
pub const BIDI_CLASSES_KEY: &str = "bidi_classes";
/// снимок коротких названий чамо
pub const JAMO_KEY: &str = "jamo";
/// снимок итоговой таблицы символов
pub const CHARACTERS_KEY: &str = "characters";

/// каталог JSON-снимков промежуточных данных
///
/// снимок записывается не более одного раза: существующий файл не перезаписывается
pub struct SnapshotCache
{
    dir: PathBuf,
}

impl SnapshotCache
{
    pub fn new(dir: impl Into<PathBuf>) -> Self
    {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path
    {
        &self.dir
    }

    pub fn path(&self, key: &str) -> PathBuf
    {
        self.dir.join(format!("{}.json", key))
    }

    /// прочитать снимок; отсутствующий или поврежденный снимок - промах, а не ошибка
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    {
        let path = self.path(key);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => {
                log::debug!("снимок {} не найден", path.display());
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => {
                log::info!("снимок {} загружен", path.display());
                Some(value)
            }
            Err(e) => {
                log::warn!("снимок {} поврежден, будет построен заново: {}", path.display(), e);
                None
            }
        }
    }

    /// записать снимок, если его еще нет (или он поврежден)
    ///
    /// запись идет во временный файл с последующим переименованием, так что
    /// прерванная запись не оставляет недописанный снимок
    pub fn store<T: Serialize + DeserializeOwned>(&self, key: &str, value: &T) -> PrepareResult<()>
    {
        let path = self.path(key);

        if self.load::<T>(key).is_some() {
            log::debug!("снимок {} уже существует", path.display());
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|e| PrepareError::io(&self.dir, e))?;

        let json = serde_json::to_string(value)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, json).map_err(|e| PrepareError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| PrepareError::io(&path, e))?;

        log::info!("снимок {} записан", path.display());

        Ok(())
    }
}

/// получить артефакт из кэша, а при промахе - получить исходный текст, разобрать его и сохранить снимок
pub fn memoized<T, F, P>(cache: &SnapshotCache, key: &str, fetch: F, parse: P) -> PrepareResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> PrepareResult<String>,
    P: FnOnce(&str) -> PrepareResult<T>,
{
    if let Some(value) = cache.load(key) {
        return Ok(value);
    }

    let text = fetch()?;
    let value = parse(&text)?;

    cache.store(key, &value)?;

    Ok(value)
}
