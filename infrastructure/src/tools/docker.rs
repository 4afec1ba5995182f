//! Docker CLI tools
//!
//! One entry per wrapped `docker` operation. Builders emit fixed leading
//! tokens first (subcommand), then flags and positionals in the order the
//! docker CLI expects for that operation — the placement differs per tool
//! (`exec` puts the container ID before its flags, `run` puts the image
//! after them) and is deliberately not generalized. Free-text inner
//! commands go through [`CommandText`], never through a naive split.

use dockhand_domain::{
    BoundArguments, CommandSpec, CommandText, ParameterSpec, ToolEntry, ToolSchema,
};

/// Program identifier, resolved through PATH by the OS.
pub const DOCKER: &str = "docker";

pub const INSPECT: &str = "docker_inspect";
pub const PS: &str = "docker_ps";
pub const HISTORY: &str = "docker_history";
pub const DIFF: &str = "docker_diff";
pub const RUN: &str = "docker_run";
pub const EXEC: &str = "docker_exec";
pub const SBOM: &str = "docker_sbom";
pub const IMAGE_LIST: &str = "docker_image_list";
pub const IMAGE_INSPECT: &str = "docker_image_inspect";
pub const IMAGE_HISTORY: &str = "docker_image_history";
pub const SEARCH: &str = "docker_search";
pub const PULL: &str = "docker_pull";
pub const COMMIT: &str = "docker_commit";

/// `docker inspect <containerID>`
pub fn inspect_entry() -> ToolEntry {
    let schema = ToolSchema::new(INSPECT, "Inspects a docker container, image, or volume")
        .with_parameter(ParameterSpec::text(
            "containerID",
            "The ID of the container to inspect",
            true,
        ));
    ToolEntry::new(schema, build_inspect)
        .expect_output()
        .with_target("containerID")
}

fn build_inspect(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("inspect")
        .arg(args.required_text("containerID"))
}

/// `docker ps [--filter v] [--all] [--format v] [--latest] [--no-trunc]`
pub fn ps_entry() -> ToolEntry {
    let schema = ToolSchema::new(PS, "Lists all running docker containers")
        .with_parameter(ParameterSpec::text(
            "filter",
            "Filter output based on conditions provided",
            false,
        ))
        .with_parameter(ParameterSpec::flag(
            "all",
            "Show all containers (default shows just running)",
        ))
        .with_parameter(ParameterSpec::text(
            "format",
            "Format the output using a custom template",
            false,
        ))
        .with_parameter(ParameterSpec::flag(
            "latest",
            "Show the latest created container (includes all states)",
        ))
        .with_parameter(ParameterSpec::flag("no-trunc", "Don't truncate output"));
    ToolEntry::new(schema, build_ps)
}

fn build_ps(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("ps")
        .valued_flag(args, "filter", "--filter")
        .presence_flag(args, "all", "--all")
        .valued_flag(args, "format", "--format")
        .presence_flag(args, "latest", "--latest")
        .presence_flag(args, "no-trunc", "--no-trunc")
}

/// `docker history <image> [--format v] [--no-trunc] [--human]`
pub fn history_entry() -> ToolEntry {
    let schema = ToolSchema::new(HISTORY, "Shows the history of an image")
        .with_parameter(ParameterSpec::text(
            "image",
            "The name of the image to show history for",
            true,
        ))
        .with_parameter(ParameterSpec::text(
            "format",
            "Format the output using a custom template",
            false,
        ))
        .with_parameter(ParameterSpec::flag("no-trunc", "Don't truncate output"))
        .with_parameter(ParameterSpec::flag(
            "human",
            "Format the output in human-readable format",
        ));
    ToolEntry::new(schema, build_history)
        .expect_output()
        .with_target("image")
}

fn build_history(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("history")
        .arg(args.required_text("image"))
        .valued_flag(args, "format", "--format")
        .presence_flag(args, "no-trunc", "--no-trunc")
        .presence_flag(args, "human", "--human")
}

/// `docker diff <containerID>`
pub fn diff_entry() -> ToolEntry {
    let schema = ToolSchema::new(DIFF, "Shows the changes made to a container's filesystem")
        .with_parameter(ParameterSpec::text(
            "containerID",
            "The ID of the container to show changes for",
            true,
        ));
    ToolEntry::new(schema, build_diff).with_target("containerID")
}

fn build_diff(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("diff")
        .arg(args.required_text("containerID"))
}

/// `docker run [flags] <image> [command...]`
pub fn run_entry() -> ToolEntry {
    let schema = ToolSchema::new(RUN, "Runs a command in a new container")
        .with_parameter(ParameterSpec::text(
            "image",
            "The name of the image to run",
            true,
        ))
        .with_parameter(ParameterSpec::text(
            "command",
            "The command to run in the container",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "name",
            "The name to assign to the container",
            false,
        ))
        .with_parameter(ParameterSpec::flag(
            "interactive",
            "Run the container in interactive mode",
        ))
        .with_parameter(ParameterSpec::flag(
            "rm",
            "Automatically remove the container when it exits",
        ))
        .with_parameter(ParameterSpec::flag(
            "detach",
            "Run the container in detached mode",
        ))
        .with_parameter(ParameterSpec::text(
            "workdir",
            "Set the working directory inside the container",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "network",
            "Connect the container to a network",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "env",
            "Set environment variables in the container",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "volume",
            "Mount a volume into the container",
            false,
        ));
    ToolEntry::new(schema, build_run).with_target("image")
}

fn build_run(args: &BoundArguments) -> CommandSpec {
    // Flags precede the image; the inner command comes last. `env` maps to
    // docker's own --env (in-container environment), not ours.
    let mut spec = CommandSpec::new(DOCKER)
        .arg("run")
        .valued_flag(args, "name", "--name")
        .presence_flag(args, "interactive", "-it")
        .presence_flag(args, "rm", "--rm")
        .presence_flag(args, "detach", "-d")
        .valued_flag(args, "workdir", "--workdir")
        .valued_flag(args, "network", "--network")
        .valued_flag(args, "env", "--env")
        .valued_flag(args, "volume", "--volume")
        .arg(args.required_text("image"));
    if let Some(command) = args.text("command") {
        spec = spec.args(CommandText::parse(command).into_tokens());
    }
    spec
}

/// `docker exec <containerID> [-i] [-d] <command...>`
pub fn exec_entry() -> ToolEntry {
    let schema = ToolSchema::new(EXEC, "Executes a command in a running container")
        .with_parameter(ParameterSpec::text(
            "containerID",
            "The ID of the container to execute the command in",
            true,
        ))
        .with_parameter(ParameterSpec::text(
            "command",
            "The command to execute in the container",
            true,
        ))
        .with_parameter(ParameterSpec::flag(
            "interactive",
            "Run the command in interactive mode",
        ))
        .with_parameter(ParameterSpec::flag(
            "detach",
            "Run the command in detached mode",
        ));
    ToolEntry::new(schema, build_exec).with_target("containerID")
}

fn build_exec(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("exec")
        .arg(args.required_text("containerID"))
        .presence_flag(args, "interactive", "-i")
        .presence_flag(args, "detach", "-d")
        .args(CommandText::parse(args.required_text("command")).into_tokens())
}

/// `docker sbom <image> [--format v] [--output v]`
pub fn sbom_entry() -> ToolEntry {
    let schema = ToolSchema::new(
        SBOM,
        "Generates a Software Bill of Materials (SBOM) for a Docker image",
    )
    .with_parameter(ParameterSpec::text(
        "image",
        "The name of the image to generate SBOM for",
        true,
    ))
    .with_parameter(ParameterSpec::text(
        "format",
        "The format of the SBOM (e.g., spdx, cyclonedx)",
        false,
    ))
    .with_parameter(ParameterSpec::text(
        "output",
        "The output file for the SBOM",
        false,
    ));
    ToolEntry::new(schema, build_sbom).with_target("image")
}

fn build_sbom(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("sbom")
        .arg(args.required_text("image"))
        .valued_flag(args, "format", "--format")
        .valued_flag(args, "output", "--output")
}

/// `docker image ls`
pub fn image_list_entry() -> ToolEntry {
    let schema = ToolSchema::new(IMAGE_LIST, "Lists all docker images");
    ToolEntry::new(schema, build_image_list)
}

fn build_image_list(_args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER).arg("image").arg("ls")
}

/// `docker image inspect <imageID> [--size] [--format v]`
pub fn image_inspect_entry() -> ToolEntry {
    let schema = ToolSchema::new(IMAGE_INSPECT, "Inspect a Docker image")
        .with_parameter(ParameterSpec::text(
            "imageID",
            "The ID of the image to inspect",
            true,
        ))
        .with_parameter(ParameterSpec::flag("size", "Display image size"))
        .with_parameter(ParameterSpec::text(
            "format",
            "Format the output using a Go template",
            false,
        ));
    ToolEntry::new(schema, build_image_inspect)
        .expect_output()
        .with_target("imageID")
}

fn build_image_inspect(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("image")
        .arg("inspect")
        .arg(args.required_text("imageID"))
        .presence_flag(args, "size", "--size")
        .valued_flag(args, "format", "--format")
}

/// `docker image history <imageID> [--format v] [--no-trunc]`
pub fn image_history_entry() -> ToolEntry {
    let schema = ToolSchema::new(IMAGE_HISTORY, "Show the history of an image")
        .with_parameter(ParameterSpec::text(
            "imageID",
            "The ID of the image to show history for",
            true,
        ))
        .with_parameter(ParameterSpec::text(
            "format",
            "Format the output using a Go template",
            false,
        ))
        .with_parameter(ParameterSpec::flag("no-trunc", "Don't truncate output"));
    ToolEntry::new(schema, build_image_history)
        .expect_output()
        .with_target("imageID")
}

fn build_image_history(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("image")
        .arg("history")
        .arg(args.required_text("imageID"))
        .valued_flag(args, "format", "--format")
        .presence_flag(args, "no-trunc", "--no-trunc")
}

/// `docker search <query> [--filter v] [--format v] [--limit v]`
pub fn search_entry() -> ToolEntry {
    let schema = ToolSchema::new(SEARCH, "Searches for Docker images")
        .with_parameter(ParameterSpec::text("query", "The search query", true))
        .with_parameter(ParameterSpec::text(
            "filter",
            "The filter to apply to the search",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "format",
            "The format to use for the output",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "limit",
            "The maximum number of results to return",
            false,
        ));
    ToolEntry::new(schema, build_search)
}

fn build_search(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("search")
        .arg(args.required_text("query"))
        .valued_flag(args, "filter", "--filter")
        .valued_flag(args, "format", "--format")
        .valued_flag(args, "limit", "--limit")
}

/// `docker pull <image>`
pub fn pull_entry() -> ToolEntry {
    let schema = ToolSchema::new(PULL, "Pulls a Docker image from a registry").with_parameter(
        ParameterSpec::text("image", "The name of the image to pull", true),
    );
    ToolEntry::new(schema, build_pull).with_target("image")
}

fn build_pull(args: &BoundArguments) -> CommandSpec {
    CommandSpec::new(DOCKER)
        .arg("pull")
        .arg(args.required_text("image"))
}

/// `docker commit <containerID> [repository] [tag] [--message v] [--author v] [--change v] [--pause v]`
pub fn commit_entry() -> ToolEntry {
    let schema = ToolSchema::new(COMMIT, "Creates a new image from a container's changes")
        .with_parameter(ParameterSpec::text(
            "containerID",
            "The ID of the container to commit",
            true,
        ))
        .with_parameter(ParameterSpec::text(
            "repository",
            "The repository name for the new image",
            false,
        ))
        .with_parameter(ParameterSpec::text("tag", "The tag for the new image", false))
        .with_parameter(ParameterSpec::text("message", "A commit message", false))
        .with_parameter(ParameterSpec::text(
            "author",
            "The author of the new image",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "change",
            "Apply a Dockerfile instruction to the container's filesystem",
            false,
        ))
        .with_parameter(ParameterSpec::text(
            "pause",
            "Pause the container during commit",
            false,
        ));
    ToolEntry::new(schema, build_commit).with_target("containerID")
}

fn build_commit(args: &BoundArguments) -> CommandSpec {
    // repository and tag are bare positionals after the container ID.
    CommandSpec::new(DOCKER)
        .arg("commit")
        .arg(args.required_text("containerID"))
        .optional_arg(args, "repository")
        .optional_arg(args, "tag")
        .valued_flag(args, "message", "--message")
        .valued_flag(args, "author", "--author")
        .valued_flag(args, "change", "--change")
        .valued_flag(args, "pause", "--pause")
}
