use icu_normalizer::DecomposingNormalizer;

use crate::error::{UcdError, UcdResult};
use crate::jamo::JamoShortNames;
use crate::properties::Character;

pub mod hangul;
pub mod names;

use names::derive_name;

const FIRST_SUFFIX: &str = ", First>";
const LAST_SUFFIX: &str = ", Last>";

/// состояние разбора диапазонов
///
/// в UnicodeData.txt блоки, названия символов которых выводятся алгоритмически, записаны парами:
///
/// AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
/// D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
///
#[derive(Debug, PartialEq)]
enum RangeState
{
    /// обычные записи
    Idle,
    /// встретили начало диапазона, следующей записью должен быть его конец
    AwaitingLast
    {
        name: String,
        start: u32,
    },
}

/// развернуть диапазоны First/Last в отдельные символы
///
/// свойства символов диапазона берутся из записи Last, декомпозиция вычисляется как NFD символа,
/// название - по правилам NR1/NR2. запись First заменяется развернутым диапазоном, последний элемент
/// диапазона соответствует записи Last
pub fn expand_ranges(records: Vec<Character>, jamo: &JamoShortNames) -> UcdResult<Vec<Character>>
{
    let normalizer = DecomposingNormalizer::new_nfd();

    let mut result = Vec::with_capacity(records.len());
    let mut state = RangeState::Idle;

    for record in records {
        state = match state {
            RangeState::Idle => {
                if record.name.ends_with(LAST_SUFFIX) {
                    return Err(UcdError::OrphanedRangeEnd {
                        name: record.name,
                        code: record.code,
                    });
                }

                match record.name.ends_with(FIRST_SUFFIX) {
                    true => RangeState::AwaitingLast {
                        name: record.name,
                        start: record.code,
                    },
                    false => {
                        result.push(record);
                        RangeState::Idle
                    }
                }
            }
            RangeState::AwaitingLast { name, start } => {
                if !record.name.ends_with(LAST_SUFFIX) || record.code < start {
                    return Err(UcdError::OrphanedRangeEnd { name, code: start });
                }

                let expanded = expand_range(start, record, jamo, &normalizer)?;

                log::debug!(
                    "диапазон {}: U+{:04X}..U+{:04X}, {} символов",
                    block_label(&name),
                    start,
                    start as usize + expanded.len() - 1,
                    expanded.len()
                );

                result.extend(expanded);
                RangeState::Idle
            }
        };
    }

    if let RangeState::AwaitingLast { name, start } = state {
        return Err(UcdError::OrphanedRangeEnd { name, code: start });
    }

    Ok(result)
}

/// название блока без обрамления: "<CJK Ideograph, First>" -> "CJK Ideograph"
pub fn block_label(name: &str) -> &str
{
    let name = name.strip_prefix('<').unwrap_or(name);

    name.strip_suffix(FIRST_SUFFIX)
        .or_else(|| name.strip_suffix(LAST_SUFFIX))
        .unwrap_or(name)
}

/// каноническая декомпозиция (NFD) кодпоинта
///
/// для кодпоинтов, не являющихся скалярными значениями (суррогаты), возвращается сам кодпоинт
pub fn canonical_decomposition(code: u32, normalizer: &DecomposingNormalizer) -> Vec<u32>
{
    match char::from_u32(code) {
        Some(c) => normalizer
            .normalize(c.encode_utf8(&mut [0; 4]))
            .chars()
            .map(u32::from)
            .collect(),
        None => vec![code],
    }
}

/// символы диапазона start ..= last.code
fn expand_range(
    start: u32,
    mut last: Character,
    jamo: &JamoShortNames,
    normalizer: &DecomposingNormalizer,
) -> UcdResult<Vec<Character>>
{
    last.name = block_label(&last.name).to_owned();

    let mut expanded = Vec::with_capacity((last.code - start) as usize + 1);

    for code in start ..= last.code {
        let decomposition = canonical_decomposition(code, normalizer);
        let name = derive_name(&last.name, code, &decomposition, jamo)?;

        expanded.push(Character {
            code,
            name,
            decomposition,
            ..last.clone()
        });
    }

    Ok(expanded)
}
