//! Colored point cloud export as PLY

use kittivis_core::{Error, Point3f, Result, Rgb};
use ply_rs::{
    ply::{Addable, DefaultElement, ElementDef, Ply, Property, PropertyDef, PropertyType, ScalarType},
    writer::Writer,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ColoredPlyWriter;

impl ColoredPlyWriter {
    /// Write `x y z red green blue` vertices. `colors` must be parallel to `points`.
    pub fn write<T, P>(points: &[T], colors: &[Rgb], path: P) -> Result<()>
    where
        T: Copy,
        Point3f: From<T>,
        P: AsRef<Path>,
    {
        if points.len() != colors.len() {
            return Err(Error::InvalidParameter(format!(
                "{} points but {} colors",
                points.len(),
                colors.len()
            )));
        }

        let mut ply = Ply::<DefaultElement>::new();

        let mut vertex_element = ElementDef::new("vertex".to_string());
        vertex_element.count = points.len();
        for name in ["x", "y", "z"] {
            vertex_element
                .properties
                .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::Float)));
        }
        for name in ["red", "green", "blue"] {
            vertex_element
                .properties
                .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::UChar)));
        }
        ply.header.elements.add(vertex_element);

        let vertices = points
            .iter()
            .zip(colors)
            .map(|(point, color)| {
                let p = Point3f::from(*point);
                let [r, g, b] = color.to_u8();
                let mut vertex = DefaultElement::new();
                vertex.insert("x".to_string(), Property::Float(p.x));
                vertex.insert("y".to_string(), Property::Float(p.y));
                vertex.insert("z".to_string(), Property::Float(p.z));
                vertex.insert("red".to_string(), Property::UChar(r));
                vertex.insert("green".to_string(), Property::UChar(g));
                vertex.insert("blue".to_string(), Property::UChar(b));
                vertex
            })
            .collect();
        ply.payload.insert("vertex".to_string(), vertices);

        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Writer::new().write_ply(&mut writer, &mut ply)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), points = points.len(), "wrote colored PLY");
        Ok(())
    }
}
