#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        if let Some(env) = remote_deploy::infrastructure::trust::parse_agent_output(output) {
            assert!(env.get("SSH_AUTH_SOCK").is_some());
            assert!(env.get("SSH_AGENT_PID").is_some());
        }
    }
});
