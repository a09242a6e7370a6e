use std::io::Write;

use thales_types::geo::GeoPoint;

use crate::error::ThalesError;
use crate::report::TriangleReport;

/// Writes the report's vertices as CSV: one row per vertex, geographic and
/// projected coordinates side by side.
///
/// Latitudes and longitudes keep 8 decimal places (~1 mm on the ground),
/// eastings and northings 4.
pub fn write_csv<W: Write>(writer: W, report: &TriangleReport) -> Result<(), ThalesError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Point", "Lat", "Lon", "UTM_Easting", "UTM_Northing"])?;
    for vertex in &report.vertices {
        csv_writer.write_record([
            vertex.label.to_string(),
            format!("{:.8}", vertex.geo.lat()),
            format!("{:.8}", vertex.geo.lon()),
            format!("{:.4}", vertex.utm.x),
            format!("{:.4}", vertex.utm.y),
        ])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(())
}
