//! Article fixtures modelled on rendered Wiktionary markup.

#![allow(dead_code)]

/// German entry for "Baum" in the pre-2024 heading markup.
pub const DE_BAUM: &str = r#"
<div class="mw-parser-output">
<h2><span class="mw-headline" id="Baum_(Deutsch)">Baum (<a href="/wiki/Deutsch" title="Deutsch">Deutsch</a>)</span></h2>
<h3><span class="mw-headline" id="Substantiv,_m"><a href="/wiki/Hilfe:Wortart#Substantiv" title="Hilfe:Wortart">Substantiv</a>, <em title="Genus: Maskulinum (der)">m</em></span></h3>
<table class="wikitable float-right inflection-table">
<tbody>
<tr><th>Kasus</th><th>Singular</th><th>Plural</th></tr>
<tr><th><a href="/wiki/Hilfe:Nominativ" title="Hilfe:Nominativ">Nominativ</a></th><td>Baum</td><td>Bäume</td></tr>
<tr><th><a href="/wiki/Hilfe:Genitiv" title="Hilfe:Genitiv">Genitiv</a></th><td>Baumes</td><td>Bäume</td></tr>
<tr><th><a href="/wiki/Hilfe:Dativ" title="Hilfe:Dativ">Dativ</a></th><td>Baum</td><td>Bäumen</td></tr>
<tr><th><a href="/wiki/Hilfe:Akkusativ" title="Hilfe:Akkusativ">Akkusativ</a></th><td>Baum</td><td>Bäume</td></tr>
</tbody>
</table>
<p title="Trennungsmöglichkeiten am Zeilenumbruch">Worttrennung:</p>
<dl><dd>Baum, <i>Plural:</i> Bäu·me</dd></dl>
<p title="Sinn und Bezeichnetes (Semantik)">Bedeutungen:</p>
<dl>
<dd>[1] <i><a href="/wiki/Botanik" title="Botanik">Botanik</a>:</i> verholzte Pflanze mit Stamm und Krone
</dd>
<dd>[2] <i>Mathematik:</i> zusammenhängender, kreisfreier Graph</dd>
<dd>  [3] <i>Informatik:</i> hierarchische Datenstruktur  </dd>
</dl>
<p title="Etymologie und Morphologie">Herkunft:</p>
<dl>
<dd>mittelhochdeutsch <i>boum,</i> althochdeutsch <i>boum</i></dd>
</dl>
<p title="Sinnverwandte Wörter">Synonyme:</p>
<dl><dd>[1] Gehölz</dd></dl>
<p title="Beispiele">Beispiele:</p>
<dl>
<dd>[1] Der Baum wirft im Herbst seine Blätter ab.</dd>
<dd>[2] Ein Baum ist ein Graph ohne Zyklen.</dd>
</dl>
<p title="Redewendungen">Redewendungen:</p>
<dl>
<dd>den Wald vor lauter Bäumen nicht sehen</dd>
<dd>Bäume ausreißen können</dd>
<dd>zwischen Baum und Borke stecken</dd>
</dl>
</div>
"#;

/// German entry for "Haus" in the 2024+ heading markup.
pub const DE_HAUS_MODERN: &str = r#"
<div class="mw-content-ltr mw-parser-output" lang="de" dir="ltr">
<div class="mw-heading mw-heading2"><h2 id="Haus_(Deutsch)">Haus (<a href="/wiki/Deutsch" title="Deutsch">Deutsch</a>)</h2></div>
<div class="mw-heading mw-heading3"><h3 id="Substantiv,_n"><a href="/wiki/Hilfe:Wortart#Substantiv" title="Hilfe:Wortart">Substantiv</a>, <em title="Genus: Neutrum (das)">n</em></h3></div>
<table class="wikitable inflection-table">
<tbody>
<tr><th>Kasus</th><th>Singular</th><th>Plural</th></tr>
<tr><th>Nominativ</th><td>das Haus</td><td>die Häuser</td></tr>
</tbody>
</table>
<p>Bedeutungen:</p>
<dl><dd>[1] Gebäude, das Menschen als Wohnung dient</dd></dl>
</div>
"#;

/// English entry for "tree" in the pre-2024 heading markup.
pub const EN_TREE: &str = r#"
<div class="mw-parser-output">
<h2><span class="mw-headline" id="English">English</span><span class="mw-editsection"><span class="mw-editsection-bracket">[</span><a href="/w/index.php?title=tree&amp;action=edit&amp;section=1">edit</a><span class="mw-editsection-bracket">]</span></span></h2>
<h3><span class="mw-headline" id="Etymology">Etymology</span></h3>
<p>From <span class="etyl">Middle English</span> <i class="Latn mention" lang="enm">tree</i>, from <span class="etyl">Old English</span> <i class="Latn mention" lang="ang">trēow</i>
</p>
<h3><span class="mw-headline" id="Pronunciation">Pronunciation</span></h3>
<ul><li>IPA: /tɹiː/</li></ul>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p><span class="headword-line"><strong class="Latn headword" lang="en">tree</strong> (<i>plural</i> <b class="Latn form-of lang-en p-form-of" lang="en"><a href="/wiki/trees" title="trees">trees</a></b>)</span>
</p>
<ol>
<li>A <a href="/wiki/perennial" title="perennial">perennial</a>
    <a href="/wiki/woody" title="woody">woody</a> <a href="/wiki/plant" title="plant">plant</a>.
<ul><li><i>The oak is a tree.</i></li><li><i>Trees shed leaves.</i></li></ul>
</li>
<li>(<i>graph theory</i>) A connected graph with no cycles.</li>
</ol>
<h4><span class="mw-headline" id="Synonyms">Synonyms</span></h4>
<ul><li>arbor</li></ul>
</div>
"#;
