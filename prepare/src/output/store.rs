use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::{CategoryCode, EncodedCharacter};
use crate::error::{PrepareError, PrepareResult};

/// примерное количество символов, которое укладывается в лимит одной транзакции
pub const BATCH_SIZE: usize = 125;

/// свойства символа в порядке, который ожидает хранилище:
///
/// [name, [numerator, denominator], decomposition[], category, combining, bidirectional,
///  decompositionType, decimal, digit, mirrored, uppercase, lowercase, titlecase]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTuple(
    pub String,
    pub (i64, u64),
    pub Vec<u32>,
    pub CategoryCode,
    pub u8,
    pub u8,
    pub u8,
    pub u8,
    pub u8,
    pub bool,
    pub u32,
    pub u32,
    pub u32,
);

impl From<&EncodedCharacter> for PropertyTuple
{
    fn from(c: &EncodedCharacter) -> Self
    {
        Self(
            c.name.clone(),
            (c.numeric.numerator, c.numeric.denominator),
            c.decomposition.clone(),
            c.category,
            c.combining,
            c.bidirectional,
            c.decomposition_type,
            c.decimal,
            c.digit,
            c.mirrored,
            c.uppercase,
            c.lowercase,
            c.titlecase,
        )
    }
}

/// внешнее хранилище, принимающее таблицу пакетами
pub trait CharacterStore
{
    /// записать пакет; ошибка - причина отказа
    fn set_batch(&mut self, codes: &[u32], data: &[PropertyTuple]) -> Result<(), String>;
}

/// передать таблицу в хранилище пакетами по batch_size символов
///
/// на первом отклоненном пакете запуск останавливается, уже записанные пакеты не откатываются.
/// возвращает количество записанных пакетов
pub fn submit<S: CharacterStore>(store: &mut S, table: &[EncodedCharacter], batch_size: usize) -> PrepareResult<usize>
{
    let batch_size = batch_size.max(1);
    let total = table.len().div_ceil(batch_size);
    let mut committed = 0;

    for (i, chunk) in table.chunks(batch_size).enumerate() {
        let codes: Vec<u32> = chunk.iter().map(|c| c.code).collect();
        let data: Vec<PropertyTuple> = chunk.iter().map(PropertyTuple::from).collect();

        if let Err(reason) = store.set_batch(&codes, &data) {
            log::error!(
                "пакет {} из {} (U+{:04X}..U+{:04X}) отклонен: {}",
                i + 1,
                total,
                codes[0],
                codes[codes.len() - 1],
                reason
            );

            return Err(PrepareError::Store {
                batch: i,
                committed,
                reason,
            });
        }

        committed += 1;
        log::debug!("пакет {} из {} записан", i + 1, total);
    }

    log::info!("записано пакетов: {}, символов: {}", committed, table.len());

    Ok(committed)
}

/// пакет в том виде, в каком он уходит в хранилище
#[derive(Debug, Serialize, Deserialize)]
pub struct Batch
{
    pub codes: Vec<u32>,
    pub data: Vec<PropertyTuple>,
}

/// хранилище, записывающее каждый пакет отдельной строкой JSON
pub struct JsonLinesStore
{
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesStore
{
    pub fn create(path: impl AsRef<Path>) -> PrepareResult<Self>
    {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| PrepareError::io(&path, e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn flush(&mut self) -> PrepareResult<()>
    {
        self.writer.flush().map_err(|e| PrepareError::io(&self.path, e))
    }
}

impl CharacterStore for JsonLinesStore
{
    fn set_batch(&mut self, codes: &[u32], data: &[PropertyTuple]) -> Result<(), String>
    {
        let batch = Batch {
            codes: codes.to_vec(),
            data: data.to_vec(),
        };

        let line = serde_json::to_string(&batch).map_err(|e| e.to_string())?;
        writeln!(self.writer, "{}", line).map_err(|e| e.to_string())
    }
}
