use std::fmt;
use std::fs;
use std::path::Path;

/// Which pipeline stage a shader source file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Fatal shader-build failures. Each variant carries enough to print a
/// useful diagnostic before the process exits.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader source {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader failed to compile: {message}")]
    Compile { stage: ShaderStage, message: String },
    #[error("shader program failed to link: {message}")]
    Link { message: String },
}

/// Read one shader stage from disk and compile it into a module.
///
/// Compilation runs under a validation error scope so a bad source file
/// surfaces here as [`ShaderError::Compile`] instead of an uncaptured
/// device error later.
pub(crate) fn compile_stage(
    device: &wgpu::Device,
    path: &Path,
    stage: ShaderStage,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let source = fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.display().to_string(),
        source,
    })?;

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "cube_vertex_stage",
            ShaderStage::Fragment => "cube_fragment_stage",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderError::Compile {
            stage,
            message: err.to_string(),
        });
    }

    tracing::debug!(path = %path.display(), %stage, "compiled shader stage");
    Ok(module)
}

/// Link the two stages into the one pipeline of the process lifetime.
///
/// Pipeline creation is the link step: interface mismatches between the
/// stages surface here as [`ShaderError::Link`].
pub(crate) fn link_pipeline(
    device: &wgpu::Device,
    descriptor: &wgpu::RenderPipelineDescriptor,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(descriptor);
    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderError::Link {
            message: err.to_string(),
        });
    }
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_match_diagnostic_wording() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn read_error_names_the_failing_path() {
        let err = ShaderError::Read {
            path: "shaders/missing.wgsl".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("shaders/missing.wgsl"));
    }

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            message: "unknown identifier".into(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("unknown identifier"));
    }
}
