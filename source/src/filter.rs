use crate::properties::Character;

/// категории, которые не попадают в итоговую таблицу: неназначенные, суррогаты, управляющие, приватные
/// https://www.unicode.org/versions/stats/charcountv14_0.html
pub const NON_CHARACTERS: [&str; 4] = ["Cn", "Cs", "Cc", "Co"];

#[inline]
pub fn is_character(character: &Character) -> bool
{
    !NON_CHARACTERS.contains(&character.category.as_str())
}

/// отфильтровать не-символы
///
/// применяется к записям до разворачивания диапазонов: диапазоны Private Use и суррогатов
/// отсекаются парой First/Last целиком
pub fn only_characters(characters: Vec<Character>) -> Vec<Character>
{
    characters.into_iter().filter(is_character).collect()
}
