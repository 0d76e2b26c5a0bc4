use criterion::{criterion_group, criterion_main, Criterion};
use unicode_character_source::{expand_ranges, only_characters, parse_derived_data, parse_unicode_data, Backfill};

mod group;

use group::Fixture;

fn parse_stage(fixture: &Fixture) -> usize
{
    parse_unicode_data(&fixture.unicode_data).unwrap().len()
}

fn derived_stage(fixture: &Fixture) -> usize
{
    parse_derived_data(&fixture.bidi_class_text).unwrap().len()
}

fn expand_stage(fixture: &Fixture) -> usize
{
    let records = only_characters(parse_unicode_data(&fixture.unicode_data).unwrap());

    expand_ranges(records, &fixture.jamo).unwrap().len()
}

fn backfill_stage(fixture: &Fixture) -> usize
{
    let records = only_characters(parse_unicode_data(&fixture.unicode_data).unwrap());
    let characters = expand_ranges(records, &fixture.jamo).unwrap();

    Backfill::new(&fixture.decomposition_types, &fixture.bidi_classes)
        .apply_all(characters)
        .len()
}

group!(parse, test_parse, "parse", "ucd", parse_stage);
group!(derived, test_derived, "derived", "ucd", derived_stage);
group!(expand, test_expand, "expand", "ucd", expand_stage);
group!(backfill, test_backfill, "backfill", "ucd", backfill_stage);

criterion_group!(benches, parse, derived, expand, backfill);
criterion_main!(benches);
