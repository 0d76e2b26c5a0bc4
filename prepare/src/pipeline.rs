use unicode_character_source::{
    expand_ranges, only_characters, parse_derived_data, parse_jamo, parse_unicode_data, Backfill, DerivedData,
    JamoShortNames,
};

use crate::cache::{memoized, SnapshotCache, BIDI_CLASSES_KEY, CHARACTERS_KEY, DECOMPOSITION_TYPES_KEY, JAMO_KEY};
use crate::encode::{encode_all, EncodedCharacter};
use crate::error::PrepareResult;
use crate::fetch::{SourceFetcher, UcdSource};

/// количество записей на этапах построения таблицы
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PipelineStats
{
    /// записей в UnicodeData.txt
    pub parsed: usize,
    /// после удаления не-символов
    pub filtered: usize,
    /// после разворачивания диапазонов
    pub expanded: usize,
}

/// результат подготовки: таблица и статистика (если таблица строилась, а не читалась из снимка)
#[derive(Debug)]
pub struct Prepared
{
    pub table: Vec<EncodedCharacter>,
    pub stats: Option<PipelineStats>,
}

/// построение итоговой таблицы символов
///
/// UnicodeData.txt -> фильтрация -> разворачивание диапазонов -> производные свойства -> кодирование
pub struct Pipeline<F: SourceFetcher>
{
    fetcher: F,
    cache: SnapshotCache,
}

impl<F: SourceFetcher> Pipeline<F>
{
    pub fn new(fetcher: F, cache: SnapshotCache) -> Self
    {
        Self { fetcher, cache }
    }

    /// итоговая таблица символов
    pub fn run(&self) -> PrepareResult<Vec<EncodedCharacter>>
    {
        Ok(self.prepare()?.table)
    }

    pub fn prepare(&self) -> PrepareResult<Prepared>
    {
        // готовая таблица - ничего не пересчитываем
        if let Some(table) = self.cache.load::<Vec<EncodedCharacter>>(CHARACTERS_KEY) {
            return Ok(Prepared { table, stats: None });
        }

        let decomposition_types = self.derived(DECOMPOSITION_TYPES_KEY, UcdSource::DerivedDecompositionType)?;
        let bidi_classes = self.derived(BIDI_CLASSES_KEY, UcdSource::DerivedBidiClass)?;

        let jamo: JamoShortNames = memoized(
            &self.cache,
            JAMO_KEY,
            || self.fetcher.fetch(UcdSource::Jamo),
            |text| Ok(parse_jamo(text)?),
        )?;

        let mut stats = PipelineStats::default();

        let records = parse_unicode_data(&self.fetcher.fetch(UcdSource::UnicodeData)?)?;
        stats.parsed = records.len();

        // фильтруем до разворачивания: диапазоны суррогатов и Private Use отсекаются вместе с парой First/Last
        let records = only_characters(records);
        stats.filtered = records.len();

        let characters = expand_ranges(records, &jamo)?;
        stats.expanded = characters.len();

        let characters = Backfill::new(&decomposition_types, &bidi_classes).apply_all(characters);
        let table = encode_all(characters)?;

        log::info!(
            "таблица построена: {} записей, {} после фильтрации, {} символов",
            stats.parsed,
            stats.filtered,
            table.len()
        );

        self.cache.store(CHARACTERS_KEY, &table)?;

        Ok(Prepared {
            table,
            stats: Some(stats),
        })
    }

    /// производная таблица UCD из снимка или исходного файла
    fn derived(&self, key: &str, source: UcdSource) -> PrepareResult<DerivedData>
    {
        memoized(
            &self.cache,
            key,
            || self.fetcher.fetch(source),
            |text| Ok(parse_derived_data(text)?),
        )
    }
}
