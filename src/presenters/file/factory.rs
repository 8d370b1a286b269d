use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::{
    bmp::BmpFilePresenter, kinds::ImageFormatKind, ppm::PpmFilePresenter,
};

#[must_use]
pub fn file_presenter_factory(kind: ImageFormatKind) -> Box<dyn FilePresenterPort> {
    match kind {
        ImageFormatKind::Bmp => Box::new(BmpFilePresenter::new()),
        ImageFormatKind::Ppm => Box::new(PpmFilePresenter::new()),
    }
}
