/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// последний слог хангыль
pub const HANGUL_S_LAST: u32 = 0xD7A3;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (на 1 меньше первой согласной - нулевой T означает её отсутствие)
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество завершающих согласных (на 1 больше)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// является ли кодпоинт слогом хангыль (правило именования NR1)
#[inline]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// алгоритмическая каноническая декомпозиция слога хангыль: LV или LVT
pub fn decompose_hangul(code: u32) -> Option<Vec<u32>>
{
    if !is_hangul_syllable(code) {
        return None;
    }

    let s = code - HANGUL_S_BASE;

    let l = HANGUL_L_BASE + s / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    Some(match t {
        0 => vec![l, v],
        _ => vec![l, v, HANGUL_T_BASE + t],
    })
}
