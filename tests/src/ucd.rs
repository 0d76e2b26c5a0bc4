use std::collections::HashSet;

use unicode_character_source::expansion::hangul::{HANGUL_S_BASE, HANGUL_S_COUNT};
use unicode_character_source::{
    expand_ranges, only_characters, parse_derived_data, Backfill, BidiClass, DecompositionType,
};

/// все названия слогов хангыль выводятся из Jamo.txt и не повторяются
#[test]
fn hangul_names()
{
    let jamo = crate::data::jamo();
    let expanded = expand_ranges(only_characters(crate::data::records()), &jamo).unwrap();

    let syllables: Vec<_> = expanded
        .iter()
        .filter(|c| (HANGUL_S_BASE .. HANGUL_S_BASE + HANGUL_S_COUNT).contains(&c.code))
        .collect();

    assert_eq!(syllables.len(), HANGUL_S_COUNT as usize);

    let names: HashSet<&str> = syllables.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names.len(), syllables.len());

    assert!(syllables.iter().all(|c| c.name.starts_with("Hangul Syllable ")));
    assert!(names.contains("Hangul Syllable Ga"));
    // короткое название первого чамо целиком в верхнем регистре
    assert!(names.contains("Hangul Syllable GGwaelh"));
    assert!(names.contains("Hangul Syllable Hih"));

    // IEUNG не имеет короткого названия
    let a = syllables.iter().find(|c| c.code == 0xC544).unwrap();
    assert_eq!(a.name, "Hangul Syllable a");
}

/// каждый кодпоинт таблицы встречается один раз и в порядке возрастания
#[test]
fn expanded_codes()
{
    let records = crate::data::records();
    assert_eq!(records.len(), 22);

    let characters = only_characters(records);
    assert_eq!(characters.len(), 17);

    let expanded = expand_ranges(characters, &crate::data::jamo()).unwrap();

    assert_eq!(expanded.len(), 13 + 6592 + 11172);
    assert!(expanded.windows(2).all(|w| w[0].code < w[1].code));
    assert!(expanded.iter().all(|c| !c.name.ends_with(", First>") && !c.name.ends_with(", Last>")));
}

/// после заполнения производных свойств все значения кодируются
#[test]
fn backfilled_values_are_known()
{
    let decomposition_types = parse_derived_data(&crate::data::read("extracted/DerivedDecompositionType.txt")).unwrap();
    let bidi_classes = parse_derived_data(&crate::data::read("extracted/DerivedBidiClass.txt")).unwrap();

    // диапазоны Private Use в плоскостях 15-16 не разворачиваются
    assert!(!bidi_classes.contains_key(&0xF0000));
    assert!(!bidi_classes.contains_key(&0x10FFFD));

    let backfill = Backfill::new(&decomposition_types, &bidi_classes);
    let expanded = expand_ranges(only_characters(crate::data::records()), &crate::data::jamo()).unwrap();

    for character in backfill.apply_all(expanded) {
        let decomposition_type = character.decomposition_type.as_deref().unwrap();

        assert!(
            DecompositionType::try_from(decomposition_type).is_ok(),
            "U+{:04X}: {}",
            character.code,
            decomposition_type
        );
        assert!(
            BidiClass::try_from(character.bidirectional.as_str()).is_ok(),
            "U+{:04X}: {}",
            character.code,
            character.bidirectional
        );
    }
}
