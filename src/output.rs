//! Rendering of matrices as a plain-text table and as CSV, plus the file
//! writes. Rendering is pure so nothing touches disk until a run succeeded.

use std::{fmt::Display, fs, path::Path};

use num::Num;

use crate::{
    error::{MatrixError, Result},
    matrix::LabeledMatrix,
};

/// Plain-text table: one header line of column labels, then one line per row
/// with the row label left-aligned and every value right-aligned in its
/// column. Values use their full `Display` precision, nothing is elided.
pub fn render_text<N>(matrix: &LabeledMatrix<N>) -> String
where
    N: Num + Copy + Display,
{
    let labels = matrix.row_labels();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = matrix
        .cells
        .rows()
        .into_iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let widths: Vec<usize> = matrix
        .columns
        .iter()
        .enumerate()
        .map(|(c, name)| {
            cells
                .iter()
                .map(|row| row[c].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (name, &w) in matrix.columns.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad_left(name, w));
    }
    out.push('\n');

    for (label, row) in labels.iter().zip(&cells) {
        out.push_str(&pad_right(label, label_width));
        for (value, &w) in row.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&pad_left(value, w));
        }
        out.push('\n');
    }
    out
}

/// CSV with the row label as unnamed index column and column labels as header.
pub fn render_csv<N>(matrix: &LabeledMatrix<N>) -> String
where
    N: Num + Copy + Display,
{
    let mut out = String::new();
    let header: Vec<String> = std::iter::once(String::new())
        .chain(matrix.columns.iter().map(|c| csv_field(c)))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for (id, row) in matrix.rows.iter().zip(matrix.cells.rows()) {
        out.push_str(&csv_field(&id.label()));
        for value in row.iter() {
            out.push(',');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| MatrixError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_field(raw: &str) -> String {
    if raw.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::vectorizer::corpus::DocumentId;

    fn sample() -> LabeledMatrix<u64> {
        LabeledMatrix::new(
            vec![DocumentId::new("news", "a.txt"), DocumentId::new("sport", "bb.txt")],
            vec!["ball".into(), "x".into()],
            array![[0, 12], [3, 1]],
        )
    }

    #[test]
    fn text_table_aligns_columns() {
        let text = render_text(&sample());
        let expected = concat!(
            "              ball   x\n",
            "news a.txt       0  12\n",
            "sport bb.txt     3   1\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn floats_keep_full_precision() {
        let m = LabeledMatrix::new(
            vec![DocumentId::new("t", "d")],
            vec!["0".into()],
            array![[0.1234567890123f64]],
        );
        assert!(render_text(&m).contains("0.1234567890123"));
    }

    #[test]
    fn csv_has_unnamed_index_column() {
        let csv = render_csv(&sample());
        assert_eq!(csv, ",ball,x\nnews a.txt,0,12\nsport bb.txt,3,1\n");
    }

    #[test]
    fn csv_quotes_special_labels() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
