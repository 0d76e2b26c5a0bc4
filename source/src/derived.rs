use std::collections::BTreeMap;

use crate::error::{UcdError, UcdResult};
use crate::unicode::parse_hex;

/// значения производного свойства: кодпоинт -> значение (в верхнем регистре)
pub type DerivedData = BTreeMap<u32, String>;

/// диапазоны, которые не разворачиваются при разборе
///
/// это оптимизация производительности, а не правило Unicode: оба диапазона - Private Use (Co),
/// такие символы не попадают в итоговую таблицу, а их значение по умолчанию и так будет верным
///
/// F0000..FFFFD  ; L # Co [65534] <private-use-F0000>..<private-use-FFFFD>
/// 100000..10FFFD; L # Co [65534] <private-use-100000>..<private-use-10FFFD>
pub const SKIPPED_RANGES: [(u32, u32); 2] = [(0xF0000, 0xFFFFD), (0x100000, 0x10FFFD)];

/// разбор производных таблиц UCD (extracted/DerivedBidiClass.txt, extracted/DerivedDecompositionType.txt)
///
/// 00A0          ; Nobreak # Zs       NO-BREAK SPACE
/// 0600..0605    ; AN # Cf   [6] ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
///
pub fn parse_derived_data(text: &str) -> UcdResult<DerivedData>
{
    let mut data = DerivedData::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || UcdError::MalformedLine {
            line: i + 1,
            value: line.to_owned(),
        };

        let (codes, value) = line.split_once(';').ok_or_else(malformed)?;

        // убираем комментарий, значение в верхнем регистре - для сопоставления с перечислением
        let value = match value.split_once('#') {
            Some((value, _)) => value,
            None => value,
        };
        let value = value.trim().to_uppercase();

        if value.is_empty() {
            return Err(malformed());
        }

        let (start, end) = match codes.trim().split_once("..") {
            Some((start, end)) => (start, end),
            None => (codes, codes),
        };

        let start = parse_hex(start).map_err(|e| e.at_line(i + 1))?;
        let end = parse_hex(end).map_err(|e| e.at_line(i + 1))?;

        if start > end {
            return Err(malformed());
        }

        if SKIPPED_RANGES.contains(&(start, end)) {
            log::debug!("пропускаем диапазон {:04X}..{:04X}", start, end);
            continue;
        }

        for code in start ..= end {
            data.insert(code, value.clone());
        }
    }

    log::debug!("производная таблица: {} кодпоинтов", data.len());

    Ok(data)
}
