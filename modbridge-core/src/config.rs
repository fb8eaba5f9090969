/// Boot-time configuration for the bridge.
///
/// Mirrors the constants the deploying page bakes in: which asset to
/// load, which canvas to render into, and (in dev builds) where the
/// rebuild-notification socket lives. Built once before boot and read
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// Path to the compiled module, relative to the page's asset root.
    pub wasm_path: String,
    /// Id of the canvas element the module renders into.
    pub canvas_id: String,
    /// Whether to open the dev reload socket.
    pub dev: bool,
    /// Local port of the dev server's notification socket.
    pub socket_port: u16,
    /// Message on the socket that triggers a page reload.
    pub reload_message: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            wasm_path: "main.wasm".to_owned(),
            canvas_id: "canvas".to_owned(),
            dev: false,
            socket_port: 8100,
            reload_message: "reload".to_owned(),
        }
    }
}

impl BootConfig {
    pub fn socket_url(&self) -> String {
        format!("ws://localhost:{}", self.socket_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_deployed_page() {
        let cfg = BootConfig::default();
        assert_eq!(cfg.wasm_path, "main.wasm");
        assert_eq!(cfg.canvas_id, "canvas");
        assert!(!cfg.dev);
    }

    #[test]
    fn socket_url_is_local() {
        let cfg = BootConfig {
            socket_port: 9000,
            ..BootConfig::default()
        };
        assert_eq!(cfg.socket_url(), "ws://localhost:9000");
    }
}
