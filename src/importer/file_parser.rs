// ==========================================
// 设备预测性维护系统 - 文件解析器实现
// ==========================================
// 职责: 上传文件 → 原始行记录 (表头 → 值 的无类型映射)
// 支持: CSV (.csv) / Excel (.xlsx/.xls), 文件路径或上传字节流
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::observation_importer_trait::FileParser;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 从任意 Read 源解析 CSV
    fn parse_reader<R: std::io::Read>(reader: R) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(reader);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        Self::parse_reader(file)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>> {
        Self::parse_reader(bytes)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 从已打开的工作簿提取原始行记录
    fn parse_workbook<RS: std::io::Read + std::io::Seek>(
        mut workbook: Xlsx<RS>,
    ) -> ImportResult<Vec<HashMap<String, String>>> {
        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        let workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        Self::parse_workbook(workbook)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>> {
        let workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        Self::parse_workbook(workbook)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<HashMap<String, String>>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// 解析上传字节流（按文件名扩展名选择解析器）
    pub fn parse_upload(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_bytes(bytes),
            "xlsx" | "xls" => ExcelParser.parse_bytes(bytes),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = temp_csv(&[
            "equipment_id,failure_probability,risk_level",
            "Pump-001,0.85,High",
            "Fan-004,0.30,Low",
        ]);

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("equipment_id"), Some(&"Pump-001".to_string()));
        assert_eq!(records[0].get("failure_probability"), Some(&"0.85".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = temp_csv(&[
            "equipment_id,failure_probability",
            "Pump-001,0.85",
            ",", // 空行
            "Fan-004,0.30",
        ]);

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_csv_parser_extra_columns_kept_verbatim() {
        // 未识别的列原样保留在行记录里, 由校验器忽略
        let temp_file = temp_csv(&[
            "equipment_id,failure_probability,risk_level,operator_note",
            "Pump-001,0.85,High,checked by Li",
        ]);

        let parser = CsvParser;
        let records = parser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("operator_note"),
            Some(&"checked by Li".to_string())
        );
    }

    #[test]
    fn test_csv_parse_bytes_matches_file_parse() {
        let content = "equipment_id,failure_probability,risk_level\nPump-001,0.85,High\n";
        let temp_file = temp_csv(&[
            "equipment_id,failure_probability,risk_level",
            "Pump-001,0.85,High",
        ]);

        let parser = CsvParser;
        let from_file = parser.parse_to_raw_records(temp_file.path()).unwrap();
        let from_bytes = parser.parse_bytes(content.as_bytes()).unwrap();

        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_universal_parser_unsupported_extension() {
        let parser = UniversalFileParser;
        let result = parser.parse_upload("readings.txt", b"x");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
