use std::path::Path;

/// Fatal texture-load failures.
///
/// A decode failure is an error here, not a silent garbage upload: a demo
/// that renders an unlit black cube because the image was missing is much
/// harder to diagnose than an exit with the path in the message.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load texture {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Decode one image file and upload it as an RGBA8 2D texture with repeat
/// addressing and linear filtering. Single mip level.
pub(crate) fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &Path,
) -> Result<(wgpu::TextureView, wgpu::Sampler), TextureError> {
    let decoded = image::open(path)
        .map_err(|source| TextureError::Decode {
            path: path.display().to_string(),
            source,
        })?
        .to_rgba8();
    let (width, height) = decoded.dimensions();

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cube_texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &decoded,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("cube_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    tracing::info!(path = %path.display(), width, height, "texture uploaded");
    Ok((view, sampler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_failing_path() {
        let source = image::ImageError::IoError(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        ));
        let err = TextureError::Decode {
            path: "assets/container.png".into(),
            source,
        };
        assert!(err.to_string().contains("assets/container.png"));
    }
}
