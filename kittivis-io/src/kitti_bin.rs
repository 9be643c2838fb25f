//! KITTI velodyne `.bin` point clouds
//!
//! A frame is a flat array of little-endian 32-bit floats; every four
//! consecutive floats are one record `[x, y, z, intensity]`.

use crate::{PointCloudReader, PointCloudWriter};
use kittivis_core::{Error, FrameLoadOptions, LidarPoint, LidarPointCloud, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Size in bytes of one `[x, y, z, intensity]` record
pub const RECORD_SIZE: usize = 16;

pub struct KittiBinReader;
pub struct KittiBinWriter;

impl KittiBinReader {
    /// Read a frame, then apply the cube filter from `options` if one is set
    pub fn read_with_options<P: AsRef<Path>>(path: P, options: &FrameLoadOptions) -> Result<LidarPointCloud> {
        let cloud = Self::read_point_cloud(path)?;
        Ok(match options.max_abs_coordinate {
            Some(bound) => {
                let kept = cloud.within_cube(bound);
                tracing::debug!(
                    bound,
                    kept = kept.len(),
                    discarded = cloud.len() - kept.len(),
                    "applied far-range cube filter"
                );
                kept
            }
            None => cloud,
        })
    }
}

impl PointCloudReader for KittiBinReader {
    type Point = LidarPoint;

    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<LidarPointCloud> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::from_open(e, path))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let cloud = parse_records(&bytes, path)?;
        tracing::debug!(path = %path.display(), points = cloud.len(), "read velodyne frame");
        Ok(cloud)
    }
}

impl PointCloudWriter for KittiBinWriter {
    type Point = LidarPoint;

    fn write_point_cloud<P: AsRef<Path>>(cloud: &LidarPointCloud, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for point in cloud {
            for value in [point.position.x, point.position.y, point.position.z, point.intensity] {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// Decode a whole frame from memory. `path` only labels the error.
pub fn parse_records(bytes: &[u8], path: &Path) -> Result<LidarPointCloud> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(Error::MalformedPointCloud {
            path: path.display().to_string(),
            byte_len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|record| {
            let f = |i: usize| f32::from_le_bytes([record[i], record[i + 1], record[i + 2], record[i + 3]]);
            LidarPoint::new(f(0), f(4), f(8), f(12))
        })
        .collect())
}
