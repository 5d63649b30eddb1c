//! Load person records from CSV

use super::Person;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the persons file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "GrossSalary")]
    gross_salary: f64,
    #[serde(rename = "BonusRate")]
    bonus_rate: f64,
    #[serde(rename = "Savings")]
    savings: f64,
}

impl CsvRow {
    fn to_person(self) -> Result<Person, Box<dyn Error>> {
        if self.gross_salary < 0.0 {
            return Err(format!("Negative GrossSalary for {}: {}", self.name, self.gross_salary).into());
        }
        if self.bonus_rate < 0.0 {
            return Err(format!("Negative BonusRate for {}: {}", self.name, self.bonus_rate).into());
        }
        if self.savings < 0.0 {
            return Err(format!("Negative Savings for {}: {}", self.name, self.savings).into());
        }

        Ok(Person {
            name: self.name,
            age: self.age,
            gross_salary: self.gross_salary,
            bonus_rate: self.bonus_rate,
            savings: self.savings,
        })
    }
}

/// Load all persons from a CSV file
pub fn load_persons<P: AsRef<Path>>(path: P) -> Result<Vec<Person>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut persons = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        persons.push(row.to_person()?);
    }

    Ok(persons)
}

/// Load persons from any reader (e.g., string buffer, network stream)
pub fn load_persons_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Person>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut persons = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        persons.push(row.to_person()?);
    }

    Ok(persons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Age,GrossSalary,BonusRate,Savings
Alice,30,95000,0.1,400000
Bob,41,130000,0.0,1200000
";

    #[test]
    fn test_load_persons_from_reader() {
        let persons = load_persons_from_reader(SAMPLE.as_bytes()).expect("Failed to load persons");
        assert_eq!(persons.len(), 2);

        assert_eq!(persons[0].name, "Alice");
        assert_eq!(persons[0].age, 30);
        assert_eq!(persons[0].gross_salary, 95_000.0);

        assert_eq!(persons[1].name, "Bob");
        assert_eq!(persons[1].bonus_rate, 0.0);
    }

    #[test]
    fn test_negative_salary_rejected() {
        let bad = "Name,Age,GrossSalary,BonusRate,Savings\nEve,28,-5,0.0,0\n";
        assert!(load_persons_from_reader(bad.as_bytes()).is_err());
    }
}
