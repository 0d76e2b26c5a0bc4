use std::collections::BTreeMap;
use std::env;
use std::fs;

/// выведем результаты бенчмарка (вывод cargo bench) как CSV: этап;вариант;время, мкс
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <имя файла>", args[0]);
        return;
    }

    match fs::read_to_string(&args[1]) {
        Ok(contents) => print!("{}", make_csv(&parse_str(&contents))),
        Err(_) => println!("Не удалось прочитать файл."),
    }
}

fn make_csv(source: &BTreeMap<(String, String), u32>) -> String
{
    let mut result = "stage;variant;time\n".to_owned();

    for ((stage, variant), time) in source {
        result.push_str(format!("{};{};{}\n", stage, variant, time).as_str());
    }

    result
}

/// строки вида "parse/ucd/fixture       time:   [1.0123 ms 1.0234 ms 1.0345 ms]"
fn parse_str(source: &str) -> BTreeMap<(String, String), u32>
{
    let mut result = BTreeMap::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let mut name = parts[0].split('/');

        let (stage, variant) = match (name.next(), name.next()) {
            (Some(stage), Some(variant)) => (stage, variant),
            _ => continue,
        };

        let mut time = match parts[4].parse::<f64>() {
            Ok(time) => time,
            Err(_) => continue,
        };

        match parts[5] {
            "ms" => time *= 1000.0,
            "s" => time *= 1_000_000.0,
            "ns" => time /= 1000.0,
            _ => (),
        }

        result.insert((stage.to_owned(), variant.to_owned()), time.trunc() as u32);
    }

    result
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn criterion_output()
    {
        let output = "parse/ucd/fixture       time:   [1.0123 ms 1.5234 ms 1.9345 ms]\n\
                      hangul/icu              time:   [812.01 µs 815.22 µs 818.40 µs]\n\
                      Found 3 outliers among 100 measurements (3.00%)\n";

        let parsed = parse_str(output);

        assert_eq!(parsed[&("parse".to_owned(), "ucd".to_owned())], 1523);
        assert_eq!(parsed[&("hangul".to_owned(), "icu".to_owned())], 815);
        assert_eq!(make_csv(&parsed), "stage;variant;time\nhangul;icu;815\nparse;ucd;1523\n");
    }
}
