//! Pure command planning
//!
//! [`plan`] turns a [`GradleTaskConfig`] into a [`CommandPlan`] using only the
//! injected environment and path resolver. The wrapper permission change is
//! returned as an instruction, never performed here.

use super::gradle_command::{ExecutableSource, GradleCommand};
use super::permissions::PermissionFix;
use crate::config::{is_blank, non_blank};
use crate::env::{Environment, GRADLE_HOME, PATH};
use crate::interfaces::PathResolver;
use crate::platform::Platform;
use serde::Serialize;
use std::path::{Path, PathBuf};

const GRADLE_BIN: &str = "bin";

/// Everything needed to plan one Gradle invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradleTaskConfig {
    pub use_wrapper: bool,
    pub make_wrapper_executable: bool,
    pub gradle_home: Option<String>,
    pub working_directory: Option<PathBuf>,
    pub options: Vec<String>,
    pub tasks: Vec<String>,
}

/// A resolved command plus the permission change it needs before launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    pub platform: Platform,
    pub command: GradleCommand,
    pub permission_fix: Option<PermissionFix>,
}

impl CommandPlan {
    /// Apply the pending permission fix, if any, and return the command tokens
    pub fn apply(self) -> Vec<String> {
        if let Some(fix) = &self.permission_fix {
            fix.apply_logged();
        }
        self.command.into_args()
    }
}

pub fn plan<E, R>(config: &GradleTaskConfig, env: &E, paths: &R) -> CommandPlan
where
    E: Environment + ?Sized,
    R: PathResolver + ?Sized,
{
    let platform = Platform::detect(env);

    let (command, permission_fix) = if config.use_wrapper {
        let wrapper = wrapper_path(config, platform, paths);
        let fix = (!platform.is_windows() && config.make_wrapper_executable)
            .then(|| PermissionFix::OwnerExecute(wrapper.clone()));
        (
            GradleCommand::new(ExecutableSource::Wrapper, path_token(&wrapper)),
            fix,
        )
    } else {
        (gradle_executable(config, platform, env, paths), None)
    };

    let command = command
        .with_args(config.options.iter().cloned())
        .with_args(config.tasks.iter().cloned());

    tracing::debug!(
        "Planned {:?} command for {}: {}",
        command.source,
        platform,
        command
    );

    CommandPlan {
        platform,
        command,
        permission_fix,
    }
}

/// Wrapper script rooted at the working directory; an unset directory resolves
/// against the current directory
fn wrapper_path<R: PathResolver + ?Sized>(
    config: &GradleTaskConfig,
    platform: Platform,
    paths: &R,
) -> PathBuf {
    let root = config.working_directory.as_deref().unwrap_or(Path::new(""));
    paths.absolute(&root.join(platform.wrapper()))
}

fn gradle_executable<E, R>(
    config: &GradleTaskConfig,
    platform: Platform,
    env: &E,
    paths: &R,
) -> GradleCommand
where
    E: Environment + ?Sized,
    R: PathResolver + ?Sized,
{
    let binary = platform.gradle();

    if let Some(home) = gradle_home(config, env) {
        let path = paths.absolute(&Path::new(&home).join(GRADLE_BIN).join(binary));
        return GradleCommand::new(ExecutableSource::GradleHome, path_token(&path));
    }

    match search_path(binary, env, paths) {
        Some(path) => GradleCommand::new(ExecutableSource::SearchPath, path_token(&path)),
        None => GradleCommand::new(ExecutableSource::Bare, binary.to_string()),
    }
}

/// Explicit home first, then `GRADLE_HOME` from the environment
pub fn gradle_home<E>(config: &GradleTaskConfig, env: &E) -> Option<String>
where
    E: Environment + ?Sized,
{
    if let Some(home) = non_blank(config.gradle_home.as_deref()) {
        return Some(home.to_string());
    }
    env.lookup(GRADLE_HOME).filter(|home| !is_blank(Some(home)))
}

/// First `PATH` entry, in listed order, containing the binary
pub fn search_path<E, R>(binary: &str, env: &E, paths: &R) -> Option<PathBuf>
where
    E: Environment + ?Sized,
    R: PathResolver + ?Sized,
{
    let search_path = env.lookup(PATH)?;
    if is_blank(Some(&search_path)) {
        return None;
    }

    std::env::split_paths(&search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(binary))
        .find(|candidate| paths.is_file(candidate))
        .map(|found| paths.absolute(&found))
}

fn path_token(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::env::{MapEnvironment, OS_NAME, OverlayEnvironment};
    use crate::services::MemoryPathResolver;
    use std::collections::HashMap;

    fn unix_env() -> MapEnvironment {
        MapEnvironment::new().with(OS_NAME, "Linux")
    }

    #[test]
    fn test_all_blank_is_bare_gradle() {
        let plan = plan(
            &GradleTaskConfig::default(),
            &unix_env(),
            &MemoryPathResolver::new("/"),
        );
        assert_eq!(plan.command.args, vec!["gradle"]);
        assert_eq!(plan.command.source, ExecutableSource::Bare);
        assert_eq!(plan.permission_fix, None);
    }

    #[test]
    fn test_wrapper_is_absolute_and_normalized() {
        let paths = MemoryPathResolver::new("/elsewhere");
        for dir in ["/proj", "/proj/", "/proj//", "/proj/./"] {
            let config = GradleTaskConfig {
                use_wrapper: true,
                working_directory: Some(PathBuf::from(dir)),
                ..Default::default()
            };
            let plan = plan(&config, &unix_env(), &paths);
            assert_eq!(plan.command.executable(), "/proj/gradlew", "{dir}");
            assert_eq!(plan.command.source, ExecutableSource::Wrapper);
        }
    }

    #[test]
    fn test_wrapper_without_working_directory_uses_current_dir() {
        let config = GradleTaskConfig {
            use_wrapper: true,
            ..Default::default()
        };
        let plan = plan(&config, &unix_env(), &MemoryPathResolver::new("/cwd"));
        assert_eq!(plan.command.executable(), "/cwd/gradlew");
    }

    #[test]
    fn test_wrapper_on_windows() {
        let env = MapEnvironment::new().with(OS_NAME, "Windows 10");
        let config = GradleTaskConfig {
            use_wrapper: true,
            make_wrapper_executable: true,
            working_directory: Some(PathBuf::from("/proj")),
            ..Default::default()
        };
        let plan = plan(&config, &env, &MemoryPathResolver::new("/"));
        assert_eq!(plan.platform, Platform::Windows);
        assert_eq!(plan.command.executable(), "/proj/gradlew.bat");
        assert_eq!(plan.permission_fix, None);
    }

    #[test]
    fn test_permission_fix_only_when_requested() {
        let mut config = GradleTaskConfig {
            use_wrapper: true,
            working_directory: Some(PathBuf::from("/ws")),
            ..Default::default()
        };
        let paths = MemoryPathResolver::new("/");
        assert_eq!(plan(&config, &unix_env(), &paths).permission_fix, None);

        config.make_wrapper_executable = true;
        assert_eq!(
            plan(&config, &unix_env(), &paths).permission_fix,
            Some(PermissionFix::OwnerExecute(PathBuf::from("/ws/gradlew")))
        );
    }

    #[test]
    fn test_make_executable_ignored_without_wrapper() {
        let config = GradleTaskConfig {
            make_wrapper_executable: true,
            ..Default::default()
        };
        let plan = plan(&config, &unix_env(), &MemoryPathResolver::new("/"));
        assert_eq!(plan.permission_fix, None);
    }

    #[test]
    fn test_gradle_home_precedence() {
        let real = unix_env().with(GRADLE_HOME, "/real/gradle");
        let overrides: HashMap<String, String> =
            [(GRADLE_HOME.to_string(), "/override/gradle".to_string())].into();
        let paths = MemoryPathResolver::new("/");

        let explicit = GradleTaskConfig {
            gradle_home: Some("/explicit/gradle".to_string()),
            ..Default::default()
        };
        let env = OverlayEnvironment::with_fallback(overrides.clone(), real.clone());
        assert_eq!(
            plan(&explicit, &env, &paths).command.executable(),
            "/explicit/gradle/bin/gradle"
        );

        let config = GradleTaskConfig::default();
        assert_eq!(
            plan(&config, &env, &paths).command.executable(),
            "/override/gradle/bin/gradle"
        );

        let env = OverlayEnvironment::with_fallback(HashMap::new(), real);
        let plan = plan(&config, &env, &paths);
        assert_eq!(plan.command.executable(), "/real/gradle/bin/gradle");
        assert_eq!(plan.command.source, ExecutableSource::GradleHome);
    }

    #[test]
    fn test_blank_gradle_home_falls_through() {
        let env = unix_env().with(GRADLE_HOME, "  ");
        let config = GradleTaskConfig {
            gradle_home: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(gradle_home(&config, &env), None);
    }

    #[test]
    fn test_relative_gradle_home_is_absolutized() {
        let config = GradleTaskConfig {
            gradle_home: Some("tools/../gradle-8".to_string()),
            ..Default::default()
        };
        let plan = plan(&config, &unix_env(), &MemoryPathResolver::new("/agent"));
        assert_eq!(plan.command.executable(), "/agent/gradle-8/bin/gradle");
    }

    #[test]
    fn test_path_search_first_match_wins() {
        let env = unix_env().with(PATH, "/opt/a:/opt/b:/opt/c");
        let paths = MemoryPathResolver::new("/")
            .with_file("/opt/b/gradle")
            .with_file("/opt/c/gradle");
        let plan = plan(&GradleTaskConfig::default(), &env, &paths);
        assert_eq!(plan.command.executable(), "/opt/b/gradle");
        assert_eq!(plan.command.source, ExecutableSource::SearchPath);
    }

    #[test]
    fn test_path_search_without_match_is_bare() {
        let env = unix_env().with(PATH, "/opt/a:/opt/b");
        let paths = MemoryPathResolver::new("/").with_file("/opt/a/gradle.bat");
        let plan = plan(&GradleTaskConfig::default(), &env, &paths);
        assert_eq!(plan.command.args, vec!["gradle"]);
    }

    #[test]
    fn test_path_search_uses_platform_binary() {
        let env = MapEnvironment::new()
            .with(OS_NAME, "windows")
            .with(PATH, "/tools");
        let paths = MemoryPathResolver::new("/").with_file("/tools/gradle.bat");
        let plan = plan(&GradleTaskConfig::default(), &env, &paths);
        assert_eq!(plan.command.executable(), "/tools/gradle.bat");
    }

    #[test]
    fn test_path_search_falls_back_to_real_environment() {
        let real = unix_env().with(PATH, "/usr/bin");
        let env = OverlayEnvironment::with_fallback(HashMap::new(), real);
        let paths = MemoryPathResolver::new("/").with_file("/usr/bin/gradle");
        let plan = plan(&GradleTaskConfig::default(), &env, &paths);
        assert_eq!(plan.command.executable(), "/usr/bin/gradle");
    }

    #[test]
    fn test_options_before_tasks() {
        let config = GradleTaskConfig {
            options: vec!["--offline".into(), "-x".into(), "test".into()],
            tasks: vec!["clean".into(), "build".into()],
            ..Default::default()
        };
        let plan = plan(&config, &unix_env(), &MemoryPathResolver::new("/"));
        assert_eq!(
            plan.command.args,
            vec!["gradle", "--offline", "-x", "test", "clean", "build"]
        );
    }

    #[test]
    fn test_apply_without_fix_returns_tokens() {
        let config = GradleTaskConfig {
            tasks: vec!["build".into()],
            ..Default::default()
        };
        let plan = plan(&config, &unix_env(), &MemoryPathResolver::new("/"));
        assert_eq!(plan.apply(), vec!["gradle", "build"]);
    }
}
