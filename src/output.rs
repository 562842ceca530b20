use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::film::Film;
use crate::math::Rgb8;

/// Receives pixels in row-major order, top row first.
pub trait PixelSink {
    fn begin(&mut self, width: usize, height: usize) -> io::Result<()>;
    fn write_pixel(&mut self, pixel: Rgb8) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// Plain text P3 writer. Pixels go straight to the underlying writer, nothing is held back.
pub struct PpmWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(inner: W) -> Self {
        PpmWriter {
            inner: BufWriter::new(inner),
        }
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

impl PpmWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(PpmWriter::new(create_with_parents(path.as_ref())?))
    }
}

impl<W: Write> PixelSink for PpmWriter<W> {
    fn begin(&mut self, width: usize, height: usize) -> io::Result<()> {
        write!(self.inner, "P3\n{} {} 255\n", width, height)
    }
    fn write_pixel(&mut self, pixel: Rgb8) -> io::Result<()> {
        let [r, g, b] = pixel;
        writeln!(self.inner, "{} {} {}", r, g, b)
    }
    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Collects the whole image and encodes it with `image` once the last pixel arrives.
pub struct PngWriter {
    path: PathBuf,
    film: Film<Rgb8>,
    cursor: usize,
}

impl PngWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        PngWriter {
            path: path.into(),
            film: Film::new(0, 0, [0; 3]),
            cursor: 0,
        }
    }

    pub fn film(&self) -> &Film<Rgb8> {
        &self.film
    }
}

impl PixelSink for PngWriter {
    fn begin(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.film = Film::new(width, height, [0; 3]);
        self.cursor = 0;
        Ok(())
    }
    fn write_pixel(&mut self, pixel: Rgb8) -> io::Result<()> {
        if self.cursor >= self.film.total_pixels() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "more pixels written than the image holds",
            ));
        }
        let (x, y) = (self.cursor % self.film.width, self.cursor / self.film.width);
        self.film.write_at(x, y, pixel);
        self.cursor += 1;
        Ok(())
    }
    fn finish(&mut self) -> io::Result<()> {
        let mut img: image::RgbImage =
            image::ImageBuffer::new(self.film.width as u32, self.film.height as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb(self.film.at(x as usize, y as usize));
        }
        ensure_parent_dir(&self.path)?;
        debug!("film holds {} bytes", self.film.size_in_bytes());
        info!("saving png to {}", self.path.display());
        img.save_with_format(&self.path, image::ImageFormat::Png)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn create_with_parents(path: &Path) -> io::Result<File> {
    ensure_parent_dir(path)?;
    File::create(path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ppm_layout() {
        let mut writer = PpmWriter::new(Vec::new());
        writer.begin(2, 1).unwrap();
        writer.write_pixel([255, 0, 7]).unwrap();
        writer.write_pixel([16, 16, 16]).unwrap();
        writer.finish().unwrap();
        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "P3\n2 1 255\n255 0 7\n16 16 16\n"
        );
    }

    #[test]
    fn test_png_writer_rejects_overflow() {
        let mut writer = PngWriter::new("unused.png");
        writer.begin(1, 1).unwrap();
        writer.write_pixel([1, 2, 3]).unwrap();
        assert!(writer.write_pixel([1, 2, 3]).is_err());
        assert_eq!(writer.film().at(0, 0), [1, 2, 3]);
    }

    #[test]
    fn test_png_writer_ignores_extension() {
        let path = std::env::temp_dir().join("sphere_raster_png_writer_test.ppm");
        let mut writer = PngWriter::new(&path);
        writer.begin(2, 1).unwrap();
        writer.write_pixel([255, 0, 7]).unwrap();
        writer.write_pixel([16, 16, 16]).unwrap();
        writer.finish().unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{:?}", &bytes[..bytes.len().min(8)]);
    }
}
