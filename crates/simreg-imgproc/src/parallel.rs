use rayon::prelude::*;

use simreg_image::{Image, Pixel};

/// Apply a function to each pixel of the image in parallel, given its coordinates.
///
/// Rows are distributed over the rayon global thread pool. The function
/// receives the `(x, y)` coordinates of the pixel and its channels.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Pixel,
{
    let cols = dst.cols();
    if cols == 0 || C == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
        });
}

/// Apply a function to each pixel of two images in parallel, writing into a third one.
///
/// The three images must share the same size; the function receives the
/// `(x, y)` coordinates of the pixel and the channels of each image.
pub fn par_iter_rows_indexed_two<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    dst: &mut Image<T3, C3>,
    f: impl Fn(usize, usize, &[T1], &[T2], &mut [T3]) + Send + Sync,
) where
    T1: Pixel,
    T2: Pixel,
    T3: Pixel,
{
    let cols = src1.cols();
    if cols == 0 || C1 == 0 || C2 == 0 || C3 == 0 {
        return;
    }

    src1.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(src2.as_slice().par_chunks_exact(C2 * cols))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C3 * cols))
        .enumerate()
        .for_each(|(y, ((src1_chunk, src2_chunk), dst_chunk))| {
            src1_chunk
                .chunks_exact(C1)
                .zip(src2_chunk.chunks_exact(C2))
                .zip(dst_chunk.chunks_exact_mut(C3))
                .enumerate()
                .for_each(|(x, ((src1_pixel, src2_pixel), dst_pixel))| {
                    f(x, y, src1_pixel, src2_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use simreg_image::ImageError;

    #[test]
    fn test_par_iter_rows_indexed() {
        let mut image = Image::<u16, 2>::zeros([3, 2].into());
        par_iter_rows_indexed(&mut image, |x, y, pixel| {
            pixel[0] = x as u16;
            pixel[1] = y as u16;
        });
        assert_eq!(image.as_slice(), &[0, 0, 1, 0, 2, 0, 0, 1, 1, 1, 2, 1]);
    }

    #[test]
    fn test_par_iter_rows_indexed_two() -> Result<(), ImageError> {
        let a = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;
        let b = Image::<f32, 1>::new([2, 2].into(), vec![10.0, 20.0, 30.0, 40.0])?;
        let mut dst = Image::<f32, 3>::zeros([2, 2].into());
        par_iter_rows_indexed_two(&a, &b, &mut dst, |x, y, pa, pb, out| {
            out[0] = pa[0] as f32 + pb[0];
            out[1] = x as f32;
            out[2] = y as f32;
        });
        assert_eq!(
            dst.as_slice(),
            &[11.0, 0.0, 0.0, 22.0, 1.0, 0.0, 33.0, 0.0, 1.0, 44.0, 1.0, 1.0]
        );
        Ok(())
    }

    #[test]
    fn test_empty_image_is_a_no_op() {
        let mut image = Image::<u8, 1>::zeros([0, 3].into());
        par_iter_rows_indexed(&mut image, |_, _, _| unreachable!());
        assert!(image.as_slice().is_empty());
    }
}
