use std::io::Write;

use quiz_core::model::{QuestionBank, QuestionKind};
use storage::{CsvRowSource, RowSource};

const BANK: &str = "\
year,category,question,type,option1,option2,option3,option4,option5,answer1,answer2,answer3,answer4,answer5
2023,Anatomy,Which bones are in the forearm?,multiple,Radius,Femur,Ulna,,,Radius,Ulna,,,
2023,Physiology,Normal resting heart rate?,single,30,70,150,,,70,,,,
2024,Anatomy,\"Largest organ, by area?\",single,Skin,Liver,,,,Skin,,,,
";

#[test]
fn file_round_trips_into_typed_bank() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(BANK.as_bytes()).expect("write bank");

    let rows = CsvRowSource::from_path(file.path())
        .read_rows()
        .expect("read rows");
    let bank = QuestionBank::load(rows).expect("load bank");

    assert_eq!(bank.len(), 3);

    let forearm = &bank.questions()[0];
    assert_eq!(forearm.kind(), QuestionKind::Multiple);
    assert_eq!(forearm.options(), ["Radius", "Femur", "Ulna"]);
    assert_eq!(forearm.correct_answers(), ["Radius", "Ulna"]);

    let quoted = &bank.questions()[2];
    assert_eq!(quoted.text(), "Largest organ, by area?");
    assert_eq!(quoted.options(), ["Skin", "Liver"]);

    let years: Vec<_> = bank.distinct_years().iter().map(ToString::to_string).collect();
    assert_eq!(years, ["2023", "2024"]);
    let categories: Vec<_> = bank
        .distinct_categories()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(categories, ["Anatomy", "Physiology"]);
}

#[test]
fn malformed_row_aborts_the_load() {
    let data = "\
year,category,question,type,option1,option2,answer1
2023,Math,ok,single,a,b,a
2023,Math,,single,a,b,a
";
    let rows = CsvRowSource::from_bytes("upload.csv", data)
        .read_rows()
        .expect("read rows");
    let err = QuestionBank::load(rows).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed row 2: missing required field `question`"
    );
}
