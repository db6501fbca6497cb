//! Static help page served at `/`

pub const CENTRAL_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Central Page</title>
    </head>
    <body>
        <p>try our APIs:</p>
        <hr>
        <p>"http://localhost:3000/"</p>
        <p>"http://localhost:3000/books/get"</p>
        <p>"http://localhost:3000/books/get/id/4"</p>
        <p>"http://localhost:3000/books/get/name/dune"</p>
        <p>"http://localhost:3000/books/get/author/agatha%20christie"</p>
        <p>"http://localhost:3000/books/get/genre/science%20fiction"</p>
        <p>"http://localhost:3000/books/get/year/2021"</p>
        <p>"http://localhost:3000/books/update/2"</p>
        <p>"http://localhost:3000/books/add"</p>
        <p>"http://localhost:3000/books/delete/3"</p>
    </body>
</html>
"#;
