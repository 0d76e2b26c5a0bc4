use std::collections::BTreeMap;

use crate::encode::EncodedCharacter;
use crate::pipeline::PipelineStats;

/// количество символов по категориям
pub fn categories(table: &[EncodedCharacter]) -> BTreeMap<String, usize>
{
    let mut stats = BTreeMap::new();

    for character in table {
        *stats.entry(character.category.decode()).or_default() += 1;
    }

    stats
}

/// информация о подготовленной таблице
pub fn print(table: &[EncodedCharacter], stats: Option<&PipelineStats>)
{
    println!("\nтаблица символов:");

    if let Some(stats) = stats {
        println!(
            "  записей UnicodeData.txt: {}\n  \
            после фильтрации: {}\n  \
            после разворачивания диапазонов: {}",
            stats.parsed, stats.filtered, stats.expanded,
        );
    }

    let decompositions = table.iter().filter(|c| !c.decomposition.is_empty()).count();

    println!(
        "  символов: {}\n  \
        с декомпозицией: {}",
        table.len(),
        decompositions,
    );

    println!();

    let categories = categories(table);
    let mut keys: Vec<&String> = categories.keys().collect();
    keys.sort_by(|a, b| categories[*b].cmp(&categories[*a]));

    for key in keys {
        println!("  {}: {}", key, categories[key]);
    }

    println!();
}
