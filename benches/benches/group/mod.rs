use unicode_character_source::{parse_derived_data, parse_jamo, DerivedData, JamoShortNames};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

pub const UCD_DIR: &str = "./../test_data/ucd";

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $stage: ident) => {
        #[inline(never)]
        fn $test(fixture: &group::Fixture) -> usize
        {
            $stage(fixture)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let fixture = group::Fixture::load(group::UCD_DIR);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            group.bench_with_input(
                criterion::BenchmarkId::new($name, "fixture"),
                &fixture,
                |b, fixture| b.iter(|| $test(criterion::black_box(fixture))),
            );

            group.finish();
        }
    };
}

/// исходные данные для замеров: тексты UCD и уже разобранные вспомогательные таблицы
pub struct Fixture
{
    pub unicode_data: String,
    pub bidi_class_text: String,
    pub jamo: JamoShortNames,
    pub decomposition_types: DerivedData,
    pub bidi_classes: DerivedData,
}

impl Fixture
{
    pub fn load(dir: &str) -> Self
    {
        let bidi_class_text = read(dir, "extracted/DerivedBidiClass.txt");

        Self {
            unicode_data: read(dir, "UnicodeData.txt"),
            jamo: parse_jamo(&read(dir, "Jamo.txt")).unwrap(),
            decomposition_types: parse_derived_data(&read(dir, "extracted/DerivedDecompositionType.txt")).unwrap(),
            bidi_classes: parse_derived_data(&bidi_class_text).unwrap(),
            bidi_class_text,
        }
    }
}

/// прочитать файл UCD
fn read(dir: &str, name: &str) -> String
{
    std::fs::read_to_string(format!("{}/{}", dir, name)).unwrap()
}
