/// Default welcome and help text.
pub const WELCOME_MESSAGE: &str = "\
Welcome to Readily, your favourite chatbot library!
Here's a list of commands you can try:
0-    help
1.0-  get the book <title>
1.1-  get book number of pages
1.2-  get book format
1.3-  get book authors
1.4-  get book isbn
1.5-  get book rating
1.6-  get book publication year
1.7-  get book description
1.8-  get book language code
1.9-  get book publisher
1.10- get book similar books
1.11- get book info
2.0-  get the author <name>
2.1-  get author number of works
2.2-  get author works
2.3-  get author gender
2.4-  get author hometown
2.5-  get author info
3-    get latest reviews
(1.x commands need a book from 1.0, 2.x commands need an author from 2.0)
";
