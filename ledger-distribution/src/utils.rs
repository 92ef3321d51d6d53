use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

const JSON_INDENT: &[u8] = b"    ";

/// Pretty prints the data with four space indentation, the layout ledger configs are kept in.
pub fn write_to_json_file<T: Serialize, P: AsRef<Path>>(
    data: &T,
    out_path: &P,
) -> anyhow::Result<()> {
    let file = File::create(out_path)?;
    let mut writer = BufWriter::new(file);
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut writer,
        PrettyFormatter::with_indent(JSON_INDENT),
    );
    data.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}

pub fn read_from_json_file<P: AsRef<Path>, T: DeserializeOwned>(in_path: &P) -> anyhow::Result<T> {
    let file = File::open(in_path)?;
    let reader = BufReader::new(file);
    let result: T = serde_json::from_reader(reader)?;

    Ok(result)
}

pub fn file_error<'a>(
    param_name: &'a str,
    file_path: &'a str,
) -> impl Fn(anyhow::Error) -> anyhow::Error + 'a {
    move |e| anyhow::anyhow!("Failure at '--{param_name} {file_path}': {e:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let data = json!({"ledger": {"0xaa": 1}, "totalShares": 1});

        write_to_json_file(&data, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n    \"ledger\": {\n        \"0xaa\": 1\n    },\n    \"totalShares\": 1\n}"
        );
        let loaded: Value = read_from_json_file(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_file_error_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = read_from_json_file::<_, Value>(&path)
            .map_err(file_error("config", "missing.json"))
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failure at '--config missing.json'"));
    }
}
