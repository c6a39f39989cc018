use crate::libclient::error::ShellError;
use crate::libgame::Choice;
use log::debug;
use raylib::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub fn asset_path(media: &Path, choice: Choice) -> PathBuf {
    media.join(format!("{}.png", choice.asset_name()))
}

fn get_hand_texture(
    path: &Path,
    handle: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<Texture2D, ShellError> {
    let asset_error = |reason: String| ShellError::Asset {
        path: path.to_path_buf(),
        reason,
    };
    let image = Image::load_image(&path.to_string_lossy()).map_err(asset_error)?;
    handle
        .load_texture_from_image(thread, &image)
        .map_err(asset_error)
}

/// one texture per hand, loaded once at startup
pub struct TextureStore {
    textures: BTreeMap<Choice, Texture2D>,
}

impl TextureStore {
    pub fn new(
        handle: &mut RaylibHandle,
        thread: &RaylibThread,
        media: &Path,
    ) -> Result<Self, ShellError> {
        if !media.is_dir() {
            return Err(ShellError::MediaDir {
                path: media.to_path_buf(),
            });
        }

        let mut textures = BTreeMap::new();
        for choice in Choice::ALL.iter() {
            let path = asset_path(media, *choice);
            debug!("loading {}", path.display());
            textures.insert(*choice, get_hand_texture(&path, handle, thread)?);
        }
        Ok(TextureStore { textures })
    }

    pub fn get(&self, choice: Choice) -> &Texture2D {
        &self.textures[&choice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        let media = Path::new("media");
        assert_eq!(
            asset_path(media, Choice::Rock),
            PathBuf::from("media/rock.png")
        );
        assert_eq!(
            asset_path(media, Choice::Scissors),
            PathBuf::from("media/scissors.png")
        );
    }

    #[test]
    fn test_shipped_assets_exist() {
        let media = Path::new(env!("CARGO_MANIFEST_DIR")).join("media");
        for choice in Choice::ALL.iter() {
            assert!(asset_path(&media, *choice).is_file(), "{}", choice);
        }
    }
}
