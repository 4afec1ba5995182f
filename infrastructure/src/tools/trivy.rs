//! Trivy CLI tools

use dockhand_domain::{BoundArguments, CommandSpec, ParameterSpec, ToolEntry, ToolSchema};

pub const TRIVY: &str = "trivy";

pub const IMAGE_SCAN: &str = "trivy_image";

/// `trivy image <image>`
pub fn image_scan_entry() -> ToolEntry {
    let schema = ToolSchema::new(
        IMAGE_SCAN,
        "Scans a Docker image for vulnerabilities using Trivy",
    )
    .with_parameter(ParameterSpec::text(
        "image",
        "The name of the image to scan",
        true,
    ));
    ToolEntry::new(schema, build_image_scan).with_target("image")
}

fn build_image_scan(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(TRIVY)
        .arg("image")
        .arg(args.required_text("image"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_domain::{ToolCall, bind_arguments};

    #[test]
    fn test_image_scan_argv() {
        let entry = image_scan_entry();
        let call = ToolCall::new(IMAGE_SCAN).with_arg("image", "alpine:3.20");
        let bound = bind_arguments(&entry.schema, &call).unwrap();
        let spec = (entry.build)(&bound);

        assert_eq!(spec.program, "trivy");
        assert_eq!(spec.argv, ["image", "alpine:3.20"]);
    }

    #[test]
    fn test_image_is_required() {
        let entry = image_scan_entry();
        let err = bind_arguments(&entry.schema, &ToolCall::new(IMAGE_SCAN)).unwrap_err();
        assert_eq!(err.parameter(), "image");
    }
}
