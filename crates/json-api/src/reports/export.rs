//! CSV rendering for report exports.

use csv::WriterBuilder;
use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    prelude::*,
};
use serde::Serialize;

use crate::extensions::*;

/// A report row with a fixed column order.
pub(crate) trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Render rows as CSV, header first. An empty report is just the header.
pub(crate) fn render<T: CsvRow>(rows: impl IntoIterator<Item = T>) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(T::HEADERS)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}

/// Write `body` as a CSV attachment named `filename`.
pub(crate) fn attach(res: &mut Response, filename: &str, body: Vec<u8>) -> Result<(), StatusError> {
    res.add_header(CONTENT_TYPE, "text/csv; charset=utf-8", true)
        .or_500("failed to set content type")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
            true,
        )
        .or_500("failed to set content disposition")?;

    res.write_body(body).or_500("failed to write csv body")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        code: &'static str,
        shop: &'static str,
        quantity: u32,
    }

    impl CsvRow for Row {
        const HEADERS: &'static [&'static str] = &["code", "shop", "quantity"];
    }

    #[test]
    fn header_comes_first() -> TestResult {
        let body = render([Row {
            code: "SHOP-01",
            shop: "Corner, Shop",
            quantity: 3,
        }])?;

        assert_eq!(
            String::from_utf8(body)?,
            "code,shop,quantity\nSHOP-01,\"Corner, Shop\",3\n"
        );

        Ok(())
    }

    #[test]
    fn empty_report_is_header_only() -> TestResult {
        let body = render(Vec::<Row>::new())?;

        assert_eq!(String::from_utf8(body)?, "code,shop,quantity\n");

        Ok(())
    }
}
