use crate::domain::model::BuildEnv;
use std::path::PathBuf;

// Redirects the src dir to '<project>/src' when a test build is requested,
// so that example sketches are not collected into the build (their setup/loop
// definitions would collide with the ones under test).

pub fn test_src_dir(env: &BuildEnv) -> Option<PathBuf> {
    if env.wants_tests() {
        Some(env.project_dir.join("src"))
    } else {
        None
    }
}

pub fn apply_test_src_dir(env: &mut BuildEnv) -> Option<PathBuf> {
    let dir = test_src_dir(env)?;
    env.src_dir = Some(dir.clone());
    Some(dir)
}
