use icu_normalizer::DecomposingNormalizer as icu;

use unicode_character_source::expansion::canonical_decomposition;
use unicode_character_source::expansion::hangul::{decompose_hangul, HANGUL_S_BASE, HANGUL_S_LAST};
use unicode_character_source::{expand_ranges, only_characters};

/// NFD слога хангыль через ICU совпадает с алгоритмической декомпозицией
#[test]
fn hangul_decomposition()
{
    let nfd = icu::new_nfd();

    for code in HANGUL_S_BASE ..= HANGUL_S_LAST {
        assert_eq!(
            Some(canonical_decomposition(code, &nfd)),
            decompose_hangul(code),
            "U+{:04X}",
            code
        );
    }
}

/// декомпозиция развернутых символов - это их NFD
#[test]
fn expanded_decompositions()
{
    let nfd = icu::new_nfd();
    let expanded = expand_ranges(only_characters(crate::data::records()), &crate::data::jamo()).unwrap();

    let mut checked = 0;

    for character in expanded.iter().filter(|c| c.name.starts_with("Hangul") || c.name.starts_with("CJK")) {
        let c = char::from_u32(character.code).unwrap();
        let expected: Vec<u32> = nfd.normalize(c.encode_utf8(&mut [0; 4])).chars().map(u32::from).collect();

        assert_eq!(character.decomposition, expected, "U+{:04X}", character.code);
        checked += 1;
    }

    assert_eq!(checked, 6592 + 11172);
}
