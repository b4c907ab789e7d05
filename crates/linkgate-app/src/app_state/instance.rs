//! Listener for deep links forwarded by later launches.

use std::path::PathBuf;

use crate::single_instance;

use super::core::LinkgateApp;

impl LinkgateApp {
    /// Start accepting warm deep links from other launches.
    ///
    /// The listener runs on a background tokio runtime; forwarded links
    /// are published on the event bus like any other deep link.
    pub fn start_instance_server(&mut self, port_file: PathBuf) -> linkgate_common::Result<()> {
        if self.instance.is_some() {
            return Ok(());
        }

        let rt = match self.tokio_runtime.take() {
            Some(rt) => rt,
            None => tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()?,
        };

        let bound = rt.block_on(single_instance::bind(&port_file));
        let listener = match bound {
            Ok(listener) => listener,
            Err(e) => {
                self.tokio_runtime = Some(rt);
                return Err(e.into());
            }
        };
        let port = listener.local_addr()?.port();

        rt.spawn(single_instance::serve(listener, self.event_bus.clone()));
        self.tokio_runtime = Some(rt);
        self.instance = Some((port_file, port));
        Ok(())
    }
}
