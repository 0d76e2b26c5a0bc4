use std::fs;

use unicode_character_source::{parse_jamo, parse_unicode_data, Character, JamoShortNames};

/// каталог с фрагментами UCD для тестов
const UCD_DIR: &str = "./../test_data/ucd";

/// прочитать файл UCD
pub fn read(name: &str) -> String
{
    fs::read_to_string(format!("{}/{}", UCD_DIR, name)).unwrap()
}

/// короткие названия чамо
pub fn jamo() -> JamoShortNames
{
    parse_jamo(&read("Jamo.txt")).unwrap()
}

/// записи UnicodeData.txt, диапазоны не развернуты
pub fn records() -> Vec<Character>
{
    parse_unicode_data(&read("UnicodeData.txt")).unwrap()
}
