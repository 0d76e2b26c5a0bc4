use crate::derived::DerivedData;
use crate::properties::Character;

/// значение типа декомпозиции для кодпоинтов, отсутствующих в DerivedDecompositionType.txt
pub const DEFAULT_DECOMPOSITION_TYPE: &str = "NONE";

// Bidi Class по умолчанию для кодпоинтов, отсутствующих в DerivedBidiClass.txt, см. UAX #44
// в отличие от других свойств, неназначенные кодпоинты в блоках письменностей справа налево получают R или AL

/// Arabic, Syriac, Thaana и др.
pub const AL_RANGES: [(u32, u32); 10] = [
    (0x0600, 0x07BF),
    (0x0860, 0x08FF),
    (0xFB50, 0xFDCF),
    (0xFDF0, 0xFDFF),
    (0xFE70, 0xFEFF),
    (0x10D00, 0x10D3F),
    (0x10F30, 0x10F6F),
    (0x1EC70, 0x1ECBF),
    (0x1ED00, 0x1ED4F),
    (0x1EE00, 0x1EEFF),
];

/// Hebrew, NKo, Phoenician и др.
pub const R_RANGES: [(u32, u32); 10] = [
    (0x0590, 0x05FF),
    (0x07C0, 0x085F),
    (0xFB1D, 0xFB4F),
    (0x10800, 0x10CFF),
    (0x10D40, 0x10F2F),
    (0x10F70, 0x10FFF),
    (0x1E800, 0x1EC6F),
    (0x1ECC0, 0x1ECFF),
    (0x1ED50, 0x1EDFF),
    (0x1EF00, 0x1EFFF),
];

/// Currency Symbols
pub const ET_RANGES: [(u32, u32); 1] = [(0x20A0, 0x20CF)];

fn in_ranges(code: u32, ranges: &[(u32, u32)]) -> bool
{
    ranges.iter().any(|&(start, end)| (start ..= end).contains(&code))
}

/// Bidi Class по умолчанию, порядок проверок важен: AL, R, ET, затем BN для неназначенных, иначе L
pub fn default_bidi_class(code: u32, category: &str) -> &'static str
{
    if in_ranges(code, &AL_RANGES) {
        return "AL";
    }

    if in_ranges(code, &R_RANGES) {
        return "R";
    }

    if in_ranges(code, &ET_RANGES) {
        return "ET";
    }

    match category == "Cn" {
        true => "BN",
        false => "L",
    }
}

/// восстановление Bidi Class и Decomposition Type из производных таблиц UCD
pub struct Backfill<'a>
{
    /// extracted/DerivedDecompositionType.txt
    pub decomposition_types: &'a DerivedData,
    /// extracted/DerivedBidiClass.txt
    pub bidi_classes: &'a DerivedData,
}

impl<'a> Backfill<'a>
{
    pub fn new(decomposition_types: &'a DerivedData, bidi_classes: &'a DerivedData) -> Self
    {
        Self {
            decomposition_types,
            bidi_classes,
        }
    }

    /// заполнить тип декомпозиции и bidi класс символа
    pub fn apply(&self, mut character: Character) -> Character
    {
        character.decomposition_type = Some(match self.decomposition_types.get(&character.code) {
            Some(value) => value.clone(),
            None => DEFAULT_DECOMPOSITION_TYPE.to_owned(),
        });

        character.bidirectional = match self.bidi_classes.get(&character.code) {
            Some(value) => value.clone(),
            None => default_bidi_class(character.code, &character.category).to_owned(),
        };

        character
    }

    pub fn apply_all(&self, characters: Vec<Character>) -> Vec<Character>
    {
        characters.into_iter().map(|c| self.apply(c)).collect()
    }
}
