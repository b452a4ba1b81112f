use simreg_geometry::{
    CenteredMotion2D, Point2D, RegistrationParams, Transform, Transform2D, TransformModel,
};
use simreg_image::{Image, ImageBuffer, ImageError, PixelType, Volume, VolumeSize};
use simreg_imgproc::composite::{composite, CompositeKind, DIFFERENCE_DISPLAY_RANGE};
use simreg_imgproc::resample::{resample, resample_2d, resample_3d, resample_volume_slice};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blob(width: usize, height: usize, cx: usize, cy: usize) -> Image<u8, 1> {
    Image::from_fn([width, height].into(), |x, y| {
        let inside = x.abs_diff(cx) <= 1 && y.abs_diff(cy) <= 1;
        [if inside { 200 } else { 0 }]
    })
}

#[test]
fn planar_transform_on_volume_matches_each_slice() -> Result<(), ImageError> {
    init_logger();

    let size = VolumeSize {
        width: 9,
        height: 7,
        depth: 4,
    };
    let slices = (0..size.depth)
        .map(|z| {
            Image::<u16, 1>::from_fn(size.slice_size(), |x, y| [(z * 1000 + y * 10 + x) as u16])
        })
        .collect();
    let volume = Volume::new(slices)?;

    let transform: Transform2D =
        CenteredMotion2D::new(Point2D::new(4.5, 3.5), 30.0, 1.2, -0.7).into();

    let resampled = resample_3d(&volume, &transform, &volume)?;
    assert_eq!(resampled.size(), size);

    for z in 0..size.depth {
        let expected = resample_2d(volume.slice(z)?, &transform, volume.slice(z)?);
        assert_eq!(resampled.slice(z)?, &expected);
        assert_eq!(
            &resample_volume_slice(&volume, &transform, &volume, z)?,
            &expected
        );
    }
    Ok(())
}

#[test]
fn registering_a_shifted_blob_cancels_the_difference() -> Result<(), ImageError> {
    init_logger();

    let reference = blob(16, 12, 5, 4);
    let moving = blob(16, 12, 8, 6);

    let params = RegistrationParams {
        model: TransformModel::Translation,
        shift_x: 3.0,
        shift_y: 2.0,
        ..Default::default()
    };
    let transform = params.to_transform_2d(reference.size());
    assert_eq!(
        transform.transform(&Point2D::new(5.0, 4.0)),
        Point2D::new(8.0, 6.0)
    );

    let registered: ImageBuffer = resample_2d(&reference, &transform, &moving).into();
    let reference: ImageBuffer = reference.into();

    let result = composite(CompositeKind::Difference, &reference, &registered)?;
    let expected: ImageBuffer = Image::<u8, 1>::from_size_val([16, 12].into(), 127).into();
    assert_eq!(result.buffer, expected);
    assert_eq!(result.display_range, Some(DIFFERENCE_DISPLAY_RANGE));

    let result = composite(CompositeKind::MagentaGreen, &reference, &registered)?;
    let ImageBuffer::Rgb8(rgb) = result.buffer else {
        panic!("magenta-green composite must be RGB");
    };
    // aligned structures are gray
    for pixel in rgb.slice(0)?.as_slice().chunks_exact(3) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
    Ok(())
}

#[test]
fn unregistered_pair_shows_both_blobs() -> Result<(), ImageError> {
    let reference: ImageBuffer = blob(16, 12, 5, 4).into();
    let moving: ImageBuffer = blob(16, 12, 11, 8).into();

    let result = composite(CompositeKind::Sum, &reference, &moving)?;
    let ImageBuffer::Gray8(sum) = result.buffer else {
        panic!("sum composite keeps the pixel type");
    };
    let lit = sum.slice(0)?.as_slice().iter().filter(|v| **v == 200).count();
    assert_eq!(lit, 18);
    Ok(())
}

#[test]
fn dynamic_resample_of_volumes() -> Result<(), Box<dyn std::error::Error>> {
    let size = VolumeSize {
        width: 4,
        height: 4,
        depth: 3,
    };
    let reference: ImageBuffer = Volume::<f32, 1>::from_size_val(size, 1.5)?.into();
    assert_eq!(reference.ndims(), 3);

    let params = RegistrationParams {
        shift_z: 2.0,
        ..Default::default()
    };
    let transform = params.to_transform_3d()?;
    let result = resample(&reference, &transform, &reference)?;

    let ImageBuffer::Float32(volume) = result else {
        panic!("resample keeps the pixel type");
    };
    assert_eq!(volume.slice(0)?.as_slice(), &[1.5; 16]);
    assert_eq!(volume.slice(1)?.as_slice(), &[0.0; 16]);
    assert_eq!(volume.slice(2)?.as_slice(), &[0.0; 16]);
    Ok(())
}

#[test]
fn composite_of_rgb_images_is_rejected() {
    let rgb: ImageBuffer = Image::<u8, 3>::zeros([2, 2].into()).into();
    for kind in [
        CompositeKind::Checkerboard { tile_size: 1 },
        CompositeKind::MagentaGreen,
        CompositeKind::Sum,
        CompositeKind::Difference,
    ] {
        assert_eq!(
            composite(kind, &rgb, &rgb),
            Err(ImageError::UnsupportedPixelType(kind.name(), PixelType::Rgb8))
        );
    }
}
