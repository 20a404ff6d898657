use anyhow::{Context, Result, bail};
use apidir_client::ApiClient;
use apidir_core::{Item, Modal, ModalContent, ParamForm};
use apidir_service::InvocationService;

pub(crate) async fn run(path: &str, base: &str, params: &[String]) -> Result<()> {
    let mut form = ParamForm::for_path(path);
    for param in params {
        let (name, value) = param
            .split_once('=')
            .with_context(|| format!("parameter '{param}' must look like name=value"))?;
        form.set(name, value)?;
    }

    let item = Item {
        name: path.to_owned(),
        path: path.to_owned(),
        desc: String::new(),
        inner_desc: None,
    };
    let service = InvocationService::new(ApiClient::new(base)?);
    let mut modal = Modal::new();
    service.invoke(&mut modal, &item, &form).await?;

    match modal.take_content() {
        ModalContent::Json(text) => println!("{text}"),
        ModalContent::Image { content_type, bytes } => {
            println!("{content_type} image, {} bytes", bytes.len());
        },
        ModalContent::Error(message) => bail!(message),
        ModalContent::Empty | ModalContent::Loading => bail!("no response recorded"),
    }
    if let Some(endpoint) = modal.endpoint() {
        tracing::info!("Invoked {}", endpoint);
    }
    Ok(())
}
