use crate::device::SetupError;
use crate::template::{FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Facts about a validated program that the session needs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ProgramInfo {
    /// Size in bytes of the uniform block bound at group 0 binding 0, if any.
    pub uniform_size: Option<u64>,
}

/// Parses and validates WGSL source with naga.
///
/// Runs before any GPU object is created so a malformed program is reported as
/// [`SetupError::ShaderCompile`] with a readable diagnostic instead of a device
/// validation panic.
pub fn validate_program(source: &str) -> Result<ProgramInfo, SetupError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| SetupError::ShaderCompile(e.emit_to_string(source)))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|e| SetupError::ShaderCompile(e.emit_to_string(source)))?;

    require_entry_point(&module, VERTEX_ENTRY, naga::ShaderStage::Vertex)?;
    require_entry_point(&module, FRAGMENT_ENTRY, naga::ShaderStage::Fragment)?;

    let uniform_size = module
        .global_variables
        .iter()
        .find(|(_, var)| {
            var.space == naga::AddressSpace::Uniform
                && var
                    .binding
                    .as_ref()
                    .is_some_and(|b| b.group == 0 && b.binding == 0)
        })
        .map(|(_, var)| u64::from(module.types[var.ty].inner.size(module.to_ctx())));

    Ok(ProgramInfo { uniform_size })
}

fn require_entry_point(
    module: &naga::Module,
    name: &str,
    stage: naga::ShaderStage,
) -> Result<(), SetupError> {
    match module.entry_points.iter().find(|ep| ep.name == name) {
        Some(ep) if ep.stage == stage => Ok(()),
        Some(ep) => Err(SetupError::ShaderCompile(format!(
            "entry point `{name}` is a {:?} stage, expected {stage:?}",
            ep.stage
        ))),
        None => Err(SetupError::ShaderCompile(format!(
            "missing {stage:?} entry point `{name}`"
        ))),
    }
}

/// Checks that the program's uniform block fits in `capacity` bytes.
///
/// Returns the block size.
pub(crate) fn check_uniform_block(info: &ProgramInfo, capacity: u64) -> Result<u64, SetupError> {
    let required = info.uniform_size.ok_or_else(|| {
        SetupError::ShaderCompile("no uniform block at @group(0) @binding(0)".into())
    })?;
    if required > capacity {
        return Err(SetupError::UniformCapacity { required, capacity });
    }
    Ok(required)
}
